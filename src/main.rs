mod cli;

use clap::Parser;
use cli::{Cli, Commands};
use colored::*;
use scheme_setu::{
    agent::SchemeSetuAgent,
    config::Config,
    eligibility::{PolicyEngine, UserProfile},
    error::{self, PolicyError},
    storage::{Rules, Scheme},
    utils,
};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match Config::load(&cli.config) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("{}", format!("Failed to load configuration: {}", e).red());
            std::process::exit(1);
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Check { age, income, category, explain, format } => {
            let profile = UserProfile::new(age, income, Some(category.as_str()));
            check_eligibility(&config, &profile, explain, &format)
        }

        Commands::Learn {
            file,
            name,
            description,
            benefit,
            link,
            min_age,
            max_age,
            max_income,
            categories,
        } => {
            let scheme = match file {
                Some(path) => read_scheme_file(&path),
                None => Ok(build_scheme(
                    name.unwrap_or_default(),
                    description,
                    benefit,
                    link,
                    Rules {
                        min_age,
                        max_age,
                        max_income,
                        category: if categories.is_empty() { None } else { Some(categories) },
                    },
                )),
            };
            scheme.and_then(|s| learn_scheme(&config, s))
        }

        Commands::List { format } => list_schemes(&config, &format),

        Commands::Show { id } => show_scheme(&config, &id),

        Commands::Request { message } => {
            let agent = SchemeSetuAgent::from_config(&config);
            println!("{}", agent.listen(&message).await);
            Ok(())
        }

        Commands::Serve => {
            info!("Serving requests on stdin...");
            serve(&config).await
        }

        Commands::Init => {
            info!("Initializing...");
            initialize(&config)
        }
    };

    if let Err(e) = result {
        error!("{}", format!("Error: {}", e).red());
        std::process::exit(1);
    }
}

fn check_eligibility(
    config: &Config,
    profile: &UserProfile,
    explain: bool,
    format: &str,
) -> error::Result<()> {
    let engine = PolicyEngine::open(&config.storage.path);

    if explain {
        let verdicts = engine.explain(profile);

        if format == "json" {
            let report: Vec<_> = verdicts
                .iter()
                .map(|(scheme, verdict)| {
                    serde_json::json!({
                        "id": scheme.id,
                        "name": scheme.name,
                        "eligible": verdict.is_eligible(),
                        "reason": verdict.to_string(),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&report)?);
            return Ok(());
        }

        println!("\n{}", "=== Eligibility Report ===".cyan().bold());
        utils::print_table_border(90);
        utils::print_table_row(&["ID", "Scheme", "Verdict"], &[8, 36, 42]);
        utils::print_table_border(90);
        for (scheme, verdict) in &verdicts {
            utils::print_table_row(
                &[
                    &scheme.id,
                    &utils::truncate(&scheme.name, 36),
                    &utils::format_verdict(verdict.is_eligible(), &verdict.to_string()),
                ],
                &[8, 36, 42],
            );
        }
        utils::print_table_border(90);
        return Ok(());
    }

    let eligible = engine.check_eligibility(profile);

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&eligible)?);
        return Ok(());
    }

    println!("\n{}", "=== Eligible Schemes ===".cyan().bold());
    println!(
        "Profile: age {}, income {}, category {}",
        profile.age,
        utils::format_rupees(profile.income),
        profile.category
    );
    println!(
        "Matched: {} of {}",
        eligible.len().to_string().green(),
        engine.schemes().len()
    );

    if eligible.is_empty() {
        println!("\n{}", "No matching schemes found for this profile.".yellow());
        return Ok(());
    }

    for scheme in &eligible {
        println!("\n{} {}", scheme.id.cyan(), scheme.name.bold());
        if !scheme.description.is_empty() {
            println!("  {}", scheme.description);
        }
        println!("  Benefit: {}", scheme.benefit.yellow());
        if let Some(link) = scheme.link() {
            println!("  Apply:   {}", link);
        }
    }

    Ok(())
}

fn build_scheme(
    name: String,
    description: String,
    benefit: String,
    link: Option<String>,
    rules: Rules,
) -> Scheme {
    Scheme {
        name,
        description,
        benefit,
        link,
        rules: Some(rules),
        ..Default::default()
    }
}

fn read_scheme_file(path: &str) -> error::Result<Scheme> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

fn learn_scheme(config: &Config, scheme: Scheme) -> error::Result<()> {
    let mut engine = PolicyEngine::open(&config.storage.path);
    let name = scheme.name.clone();
    let scheme_id = engine.add_scheme(scheme);

    println!("{} {} ({})", "✓ Learned scheme".green(), scheme_id.cyan(), name);
    println!("Stored in {}", engine.store().path().display());
    Ok(())
}

fn list_schemes(config: &Config, format: &str) -> error::Result<()> {
    let engine = PolicyEngine::open(&config.storage.path);
    let schemes = engine.schemes();

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(schemes)?);
        return Ok(());
    }

    println!("{}", "=== Registered Schemes ===".cyan().bold());
    if schemes.is_empty() {
        println!("{}", "No schemes registered yet.".yellow());
        return Ok(());
    }

    utils::print_table_border(110);
    utils::print_table_row(&["ID", "Scheme", "Benefit", "Rules"], &[8, 30, 20, 46]);
    utils::print_table_border(110);
    for scheme in schemes {
        utils::print_table_row(
            &[
                &scheme.id,
                &utils::truncate(&scheme.name, 30),
                &utils::truncate(&scheme.benefit, 20),
                &utils::format_rules(&scheme.effective_rules()),
            ],
            &[8, 30, 20, 46],
        );
    }
    utils::print_table_border(110);
    println!("Total: {}", schemes.len());

    Ok(())
}

fn show_scheme(config: &Config, id: &str) -> error::Result<()> {
    let engine = PolicyEngine::open(&config.storage.path);
    let scheme = engine
        .store()
        .get(id)
        .ok_or_else(|| PolicyError::SchemeNotFound(id.to_string()))?;

    println!("{}", serde_json::to_string_pretty(scheme)?);
    Ok(())
}

async fn serve(config: &Config) -> error::Result<()> {
    let agent = SchemeSetuAgent::from_config(config);
    info!("{} ready", agent.name());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let response = agent.listen(&line).await;
        stdout.write_all(response.as_bytes()).await?;
        stdout.write_all(b"\n").await?;
        stdout.flush().await?;
    }

    info!("Input closed, shutting down");
    Ok(())
}

fn initialize(config: &Config) -> error::Result<()> {
    println!("{}", "Initializing SchemeSetu...".green());

    let engine = PolicyEngine::open(&config.storage.path);
    if engine.store().path().exists() {
        println!("{} ({} schemes)", "✓ Scheme document found".green(), engine.schemes().len());
    } else {
        engine.store().save()?;
        println!("{}", "✓ Scheme document created".green());
    }
    println!("{}", "✓ Configuration loaded".green());

    println!("\n{}", "Configuration:".cyan());
    println!("  Agent:          {}", config.agent.name);
    println!("  Store:          {}", config.storage.path);
    println!("  Log filter:     {}", config.logging.filter);

    println!("\n{}", "Ready to use! Try running:".cyan());
    println!("  {} to register a scheme", "scheme-setu learn --name ...".yellow());
    println!("  {} to find schemes for a citizen", "scheme-setu check --age 22 --income 120000".yellow());
    println!("  {} to serve JSON requests", "scheme-setu serve".yellow());
    Ok(())
}
