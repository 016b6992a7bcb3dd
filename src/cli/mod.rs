use std::io::Write as _;

use clap::{Arg, ArgAction, Command};
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing::{error, info};

use crate::{
    config::AgentConfig,
    core::{Agent, ChatHistory},
    error::AgentError,
    tools::{
        ChecklistTool, CurrencyTool, ItineraryTool, ToolRegistry, TripCostTool, WebSearchTool,
    },
};

const PROMPT: &str = "\nType your prompt (or 'salir' to quit): ";
const RESPONSE_BANNER: &str = "\n--- Response ---";
const EXIT_COMMANDS: [&str; 3] = ["salir", "exit", "quit"];

/// Check whether a console line is a loop-termination token.
///
/// Matching is case-insensitive and ignores surrounding whitespace; the agent
/// is never invoked for these lines.
fn is_exit_command(input: &str) -> bool {
    let normalized = input.trim().to_lowercase();
    EXIT_COMMANDS.iter().any(|command| normalized == *command)
}

/// CLI entry point for the travel-agent tool
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let matches = Command::new("travel-agent")
        .version("0.1.0")
        .about("An interactive travel-agent assistant with deterministic planning tools")
        .arg(
            Arg::new("model")
                .short('m')
                .long("model")
                .value_name("MODEL")
                .help("The chat model to use"),
        )
        .arg(
            Arg::new("api-key")
                .short('k')
                .long("api-key")
                .value_name("KEY")
                .help("Chat model API key (or set OPENAI_API_KEY env var)"),
        )
        .arg(
            Arg::new("base-url")
                .short('u')
                .long("base-url")
                .value_name("URL")
                .help("API base URL (or set OPENAI_BASE_URL / OPENROUTER_BASE_URL env vars)"),
        )
        .arg(
            Arg::new("timeout")
                .short('t')
                .long("timeout")
                .value_name("SECONDS")
                .help("Request timeout in seconds")
                .default_value("120"),
        )
        .arg(
            Arg::new("max-iterations")
                .short('i')
                .long("max-iterations")
                .value_name("COUNT")
                .help("Maximum agent iterations per turn")
                .default_value("10"),
        )
        .arg(
            Arg::new("search")
                .long("search")
                .action(ArgAction::SetTrue)
                .help("Register the web search tool (requires a Tavily API key)"),
        )
        .get_matches();

    // Resolve the required chat-model key before anything else runs
    let mut config = match matches.get_one::<String>("api-key") {
        Some(key) => AgentConfig::new(key.clone()).with_env_overrides(),
        None => AgentConfig::from_env()?,
    };

    if let Some(model) = matches.get_one::<String>("model") {
        config.model = model.clone();
    }
    if let Some(base_url) = matches.get_one::<String>("base-url") {
        config.base_url = base_url.clone();
    }
    let timeout_seconds: u64 = matches.get_one::<String>("timeout").unwrap().parse()?;
    config.timeout = std::time::Duration::from_secs(timeout_seconds);
    config.max_iterations = matches
        .get_one::<String>("max-iterations")
        .unwrap()
        .parse()?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    let search_enabled = matches.get_flag("search");
    if search_enabled && config.search_api_key.is_none() {
        config.search_api_key = Some(prompt_for_search_key(&mut lines).await?);
    }

    // Assemble the tool set
    let mut tools = ToolRegistry::new();
    tools.register(TripCostTool::new());
    tools.register(ItineraryTool::new());
    tools.register(ChecklistTool::new());
    tools.register(CurrencyTool::new());
    if search_enabled {
        if let Some(search_key) = config.search_api_key.as_deref() {
            tools.register(WebSearchTool::new(search_key));
        }
    }

    info!("Using model: {}", config.model);
    info!("Base URL: {}", config.base_url);

    let agent = Agent::from_config(&config, tools);
    let mut history = ChatHistory::new();

    println!("Travel agent ready. Ask about trip costs, itineraries, checklists, or currency.");

    loop {
        print!("{}", PROMPT);
        std::io::stdout().flush()?;

        let line = tokio::select! {
            // Interrupt exits the loop silently
            _ = tokio::signal::ctrl_c() => break,
            line = lines.next_line() => line?,
        };

        let Some(line) = line else {
            break; // EOF on stdin
        };

        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if is_exit_command(input) {
            break;
        }

        match agent.respond(&history, input).await {
            Ok(reply) => {
                println!("{}", RESPONSE_BANNER);
                println!("{}", reply);

                history.push_user(input);
                history.push_assistant(&reply);
            }
            Err(e) => {
                error!("Agent turn failed: {}", e);
                return Err(e.into());
            }
        }
    }

    Ok(())
}

/// Ask for the search API key when it is not in the environment.
///
/// The key is kept in the run's configuration; the process environment is
/// never mutated.
async fn prompt_for_search_key(
    lines: &mut Lines<BufReader<Stdin>>,
) -> Result<String, AgentError> {
    print!("Enter your Tavily API key: ");
    std::io::stdout()
        .flush()
        .map_err(|err| AgentError::Config(format!("Failed to flush stdout: {err}")))?;

    let line = lines
        .next_line()
        .await
        .map_err(|err| AgentError::Config(format!("Failed to read search API key: {err}")))?;

    match line.map(|l| l.trim().to_string()) {
        Some(key) if !key.is_empty() => Ok(key),
        _ => Err(AgentError::Config(
            "A Tavily API key is required to enable the web search tool".to_string(),
        )),
    }
}
