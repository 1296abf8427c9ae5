//! Parameter listing command.

#![allow(clippy::print_literal)] // Table headers use literal strings intentionally

use clap::Args;
use feather_core::ParamDescriptor;
use feather_eq::PARAMS;

#[derive(Args)]
pub struct ParamsArgs {
    /// Print as JSON instead of a table
    #[arg(long)]
    json: bool,
}

pub fn run(args: &ParamsArgs) -> anyhow::Result<()> {
    if args.json {
        println!("{}", serde_json::to_string_pretty(&params_json(&PARAMS))?);
        return Ok(());
    }

    println!("Feather EQ Parameters");
    println!("=====================");
    println!();
    println!(
        "  {:>3}  {:8}  {:8}  {:>14}  {:>6}  {:>8}",
        "ID", "Name", "Key", "Range", "Step", "Default"
    );
    println!(
        "  {:>3}  {:8}  {:8}  {:>14}  {:>6}  {:>8}",
        "--", "----", "---", "-----", "----", "-------"
    );

    for desc in &PARAMS {
        println!(
            "  {:>3}  {:8}  {:8}  {:>14}  {:>6}  {:>8}",
            desc.id.0,
            desc.name,
            desc.string_id,
            format!("{} .. {}", desc.min, desc.max),
            desc.step,
            desc.format_value(desc.default),
        );
    }

    println!();
    println!("Example usage:");
    println!();
    println!("  feather render in.wav out.wav --param \"Gain 1=6\" --band 2:freq=400,q=2");

    Ok(())
}

fn params_json(params: &[ParamDescriptor]) -> serde_json::Value {
    params
        .iter()
        .enumerate()
        .map(|(index, desc)| {
            serde_json::json!({
                "index": index,
                "id": desc.id.0,
                "key": desc.string_id,
                "name": desc.name,
                "group": desc.group,
                "unit": desc.unit.suffix().trim(),
                "min": desc.min,
                "max": desc.max,
                "step": desc.step,
                "default": desc.default,
            })
        })
        .collect()
}
