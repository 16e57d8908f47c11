use anyhow::{Context, Result};
use retroboy::{format_registers, RunConfig, DEFAULT_MAX_STEPS, DEFAULT_ORIGIN};

fn main() {
    env_logger::init();

    if let Err(err) = try_main() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

fn try_main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let Some(program_path) = args.next() else {
        eprintln!(
            "Usage: retroboy <program.bin> [origin-hex] [max-steps]\n\
             For example: retroboy demo.bin 0100 5000"
        );
        std::process::exit(1);
    };

    let origin = match args.next() {
        Some(text) => {
            let digits = text.trim_start_matches("0x").trim_start_matches("0X");
            u16::from_str_radix(digits, 16)
                .with_context(|| format!("invalid origin '{text}', expected hex"))?
        }
        None => DEFAULT_ORIGIN,
    };
    let max_steps = match args.next() {
        Some(text) => text
            .parse()
            .with_context(|| format!("invalid step limit '{text}'"))?,
        None => DEFAULT_MAX_STEPS,
    };

    log::info!("Loading program: '{}'", program_path);
    let program = std::fs::read(&program_path)
        .with_context(|| format!("failed to read program file '{program_path}'"))?;

    let config = RunConfig::builder()
        .program(program)
        .origin(origin)
        .max_steps(max_steps)
        .build();
    let summary = retroboy::run(&config)?;

    println!(
        "stopped: {} ({} steps, {} cycles)",
        summary.reason, summary.steps, summary.cycles
    );
    println!("{}", format_registers(&summary.cpu));
    Ok(())
}
