use std::env;

use xer_reader::XerReader;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!(
            "Usage: {} <path-to-xer-file> [--encoding <LABEL>] [--write <OUT.xer>]",
            args[0]
        );
        std::process::exit(1);
    }

    let xer_path = &args[1];
    let encoding = flag_value(&args, "--encoding");
    let output = flag_value(&args, "--write");

    println!("Reading XER file: {}", xer_path);
    if let Some(label) = encoding {
        println!("Using text encoding: {}", label);
    }
    println!("{}", "=".repeat(60));

    let reader = match XerReader::new(xer_path, encoding) {
        Ok(reader) => reader,
        Err(e) => {
            eprintln!("\nERROR: Failed to read XER file");
            eprintln!("  {}", e);
            std::process::exit(1);
        }
    };

    println!("\nExport Information:");
    match &reader.header {
        Some(header) => {
            println!("  Version: {}", header.version);
            println!("  Exported: {} by {}", header.export_date, header.user_name);
            println!("  Type: {}", header.export_type);
            println!("  Currency: {}", header.currency);
        }
        None => println!("  (no ERMHDR row)"),
    }
    println!("  Encoding: {}", reader.encoding.name());

    println!("\nTables:");
    for (table, count) in reader.summary() {
        println!("  {:<14} {:>8}", table.name(), count);
    }

    if !reader.warnings.is_empty() {
        println!("\nWarnings:");
        for warning in &reader.warnings {
            println!("  {}", warning);
        }
    }

    let tasks = reader.data.tasks();
    println!("\nSample Activities (first 10):");
    for (i, task) in tasks.iter().take(10).enumerate() {
        println!(
            "  {}. [{}] {} ({:.1}d, {} predecessors)",
            i + 1,
            task.task_code.as_deref().unwrap_or("-"),
            task.task_name.as_deref().unwrap_or(""),
            task.duration_days(),
            task.predecessors().len()
        );
    }
    if tasks.len() > 10 {
        println!("  ... and {} more", tasks.len() - 10);
    }

    if let Some(path) = output {
        match reader.write(path) {
            Ok(()) => println!("\nWrote {}", path),
            Err(e) => {
                eprintln!("\nERROR: Failed to write XER file");
                eprintln!("  {}", e);
                std::process::exit(1);
            }
        }
    }
}

/// The argument following `flag`, exiting when the flag has none.
fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    let index = args.iter().position(|arg| arg == flag)?;
    match args.get(index + 1) {
        Some(value) => Some(value.as_str()),
        None => {
            eprintln!("ERROR: {} flag requires an argument.", flag);
            std::process::exit(1);
        }
    }
}
