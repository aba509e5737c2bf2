/// Systemics — Exemplar Build Driver
///
/// Usage:
///   systemics_exemplars <exemplar_id> [out_dir]
///   systemics_exemplars --all [out_root]
///
/// Builds report.tex and law_report.json for one exemplar (default out
/// dir: <exemplar_id>/build) or for every registered exemplar under
/// <out_root>/<exemplar_id>/build.

use std::env;
use std::path::PathBuf;
use std::process;

use systemics_exemplars::registry;

fn usage() -> ! {
    eprintln!("Usage: systemics_exemplars <exemplar_id> [out_dir]");
    eprintln!("       systemics_exemplars --all [out_root]");
    process::exit(2);
}

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    if args.is_empty() || args.len() > 2 {
        usage();
    }

    if args[0] == "--all" {
        let out_root = PathBuf::from(args.get(1).map(String::as_str).unwrap_or("exemplars"));
        for (id, build) in registry::all() {
            let out_dir = out_root.join(id).join("build");
            match build(&out_dir) {
                Ok(report) => println!(
                    "Built exemplar: {} -> {} ({} traces)",
                    id,
                    out_dir.display(),
                    report.trace_count
                ),
                Err(e) => {
                    eprintln!("Failed to build {}: {}", id, e);
                    process::exit(1);
                }
            }
        }
        return;
    }

    let id = args[0].as_str();
    let Some(build) = registry::lookup(id) else {
        eprintln!("Unknown exemplar: {}", id);
        eprintln!("Registered exemplars:");
        for (name, _) in registry::all() {
            eprintln!("  {}", name);
        }
        process::exit(2);
    };

    let out_dir = args
        .get(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(id).join("build"));

    match build(&out_dir) {
        Ok(report) => println!(
            "Built exemplar: {} -> {} ({} traces)",
            id,
            out_dir.display(),
            report.trace_count
        ),
        Err(e) => {
            eprintln!("Failed to build {}: {}", id, e);
            process::exit(1);
        }
    }
}
