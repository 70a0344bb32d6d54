//! Run a few commands against a network device's shell.
//!
//! Shows the callback and async styles side by side, pagination handled by
//! the queue, and the session events.
//!
//! # Usage
//!
//! With password authentication:
//! ```bash
//! cargo run --example run_commands -- --host 10.0.0.1 --user admin --password secret --preset ios
//! ```
//!
//! With SSH key authentication and a custom prompt:
//! ```bash
//! cargo run --example run_commands -- --host 10.0.0.1 --user admin --key ~/.ssh/id_rsa --prompt '^\S+[>#]\s*'
//! ```

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use shellqueue::{AuthMethod, ManagerBuilder, PatternSpec, SessionEvent, SshConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging (set RUST_LOG=debug for verbose output)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let auth = if let Some(password) = &args.password {
        AuthMethod::password(password)
    } else if let Some(key_path) = &args.key {
        AuthMethod::private_key(key_path)
    } else {
        eprintln!("Error: Must provide either --password or --key");
        std::process::exit(1);
    };

    let mut builder = ManagerBuilder::new().verbose(true);
    if let Some(preset) = &args.preset {
        builder = builder
            .prompt(PatternSpec::preset(preset))
            .more(PatternSpec::preset(preset));
    }
    if let Some(prompt) = &args.prompt {
        builder = builder.prompt(PatternSpec::regex(prompt));
    }
    let (mut manager, mut events) = builder.build()?;

    println!("Connecting to {}:{}...", args.host, args.port);
    let config = SshConfig::new(&args.host, &args.user, auth)
        .port(args.port)
        .timeout(Duration::from_secs(args.timeout));
    manager.connect(config)?;

    // Queued before the banner arrives; written once the shell is ready.
    manager.run("show clock", |response| {
        println!("[callback] {} -> {}", response.command, response.result.trim());
    })?;

    let banner = events.ready().await?;
    println!("Connected! Banner:\n{}", banner);

    for command in &args.commands {
        println!("\nExecuting: {}", command);
        println!("{}", "-".repeat(50));
        let response = manager.send_command(command).await?;
        println!("{}", response.result);
        println!("{}", "-".repeat(50));
        println!("Completed in {:?} (prompt {:?})", response.elapsed, response.prompt);
    }

    println!("\nClosing connection...");
    manager.close().await?;

    while let Some(event) = events.recv().await {
        match event {
            SessionEvent::Error(e) => eprintln!("session error: {}", e),
            SessionEvent::End => println!("remote ended the session"),
            SessionEvent::Closed => println!("closed"),
            SessionEvent::Ready(_) => {}
        }
    }

    Ok(())
}

/// Simple argument parser
struct Args {
    host: String,
    port: u16,
    user: String,
    password: Option<String>,
    key: Option<PathBuf>,
    preset: Option<String>,
    prompt: Option<String>,
    timeout: u64,
    commands: Vec<String>,
}

impl Args {
    fn parse() -> Self {
        let args: Vec<String> = env::args().collect();
        let mut parsed = Self {
            host: "localhost".to_string(),
            port: 22,
            user: env::var("USER").unwrap_or_else(|_| "admin".to_string()),
            password: None,
            key: None,
            preset: None,
            prompt: None,
            timeout: 30,
            commands: Vec::new(),
        };

        let mut i = 1;
        while i < args.len() {
            let value = args.get(i + 1).cloned();
            match args[i].as_str() {
                "--host" | "-h" => parsed.host = value.unwrap_or(parsed.host),
                "--port" | "-p" => {
                    parsed.port = value.and_then(|v| v.parse().ok()).unwrap_or(22)
                }
                "--user" | "-u" => parsed.user = value.unwrap_or(parsed.user),
                "--password" | "-P" => parsed.password = value,
                "--key" | "-k" => parsed.key = value.map(PathBuf::from),
                "--preset" => parsed.preset = value,
                "--prompt" => parsed.prompt = value,
                "--timeout" | "-t" => {
                    parsed.timeout = value.and_then(|v| v.parse().ok()).unwrap_or(30)
                }
                "--command" | "-c" => parsed.commands.extend(value),
                "--help" => {
                    Self::print_help();
                    std::process::exit(0);
                }
                other => {
                    eprintln!("Unknown argument: {}", other);
                    i += 1;
                    continue;
                }
            }
            i += 2;
        }

        if parsed.commands.is_empty() {
            parsed.commands = vec!["show version".to_string(), "show interfaces".to_string()];
        }
        parsed
    }

    fn print_help() {
        println!(
            r#"shellqueue run_commands example

USAGE:
    cargo run --example run_commands -- [OPTIONS]

OPTIONS:
    -h, --host <HOST>        Target host [default: localhost]
    -p, --port <PORT>        SSH port [default: 22]
    -u, --user <USER>        Username [default: $USER]
    -P, --password <PASS>    Password for authentication
    -k, --key <PATH>         Path to SSH private key
    --preset <NAME>          Prompt and pagination preset (junos, ios, acos, eos)
    --prompt <REGEX>         Prompt pattern, overrides the preset's
    -t, --timeout <SECS>     Connection timeout [default: 30]
    -c, --command <CMD>      Command to run; repeatable
    --help                   Print this help message
"#
        );
    }
}
