use clap::Parser;
use serde_json::Value;
use std::collections::HashMap;
use tag_interpolation::{default_registry, engine, Env, Formats};

/// Simple runner: interpolate a pattern or format alias from the CLI.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Pattern or format alias, e.g. ":title - :app" or "default"
    pattern: String,
    /// Title for the `:title` tag (optional)
    #[arg(long)]
    title: Option<String>,
    /// Application display name override for the `:app` tag (optional)
    #[arg(long)]
    app: Option<String>,
    /// Extra env options as a JSON object, e.g. '{"app":"Widgets"}'
    #[arg(long)]
    options: Option<String>,
}

fn main() {
    tracing_subscriber::fmt::init();

    // Parse CLI arguments.
    let args = Args::parse();

    // Collect env options: --options JSON first, --app on top.
    let mut options: HashMap<String, Value> = match args.options.as_deref() {
        Some(raw) => match serde_json::from_str(raw) {
            Ok(map) => map,
            Err(e) => {
                eprintln!("Invalid options JSON: {e}");
                std::process::exit(1);
            }
        },
        None => HashMap::new(),
    };
    if let Some(app) = args.app {
        options.insert("app".to_string(), Value::String(app));
    }

    // Build the per-call env.
    let mut env = Env::new().with_options(options);
    if let Some(title) = args.title {
        env = env.with_title(title);
    }

    // Treat the positional argument as an alias when one matches.
    let pattern = Formats::builtin().expand(&args.pattern);

    // Interpolate and print.
    match engine::interpolate(default_registry(), &pattern, &env, &[]) {
        Ok(out) => println!("{out}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
