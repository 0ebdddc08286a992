use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table as Grid};

use crate::cards::parse_ranks;
use crate::codes::{BUST_CODE, DEALER_CODE};
use crate::display::{
    dealer_table, describe_decision, ev_table, percent_table, print_error, print_section,
    strategy_legend, strategy_table, styled_decision,
};
use crate::error::BjResult;
use crate::hand::Hand;
use crate::solver::{self, Solution};
use crate::strategy;

#[derive(Parser)]
#[command(
    name = "easybj",
    version = "1.0.0",
    about = "Easy Blackjack solver — action EVs, optimal strategy, and player edge."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum TableName {
    Initial,
    Dealer,
    Stand,
    Hit,
    Double,
    Split,
    Optimal,
    Strategy,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the optimal strategy chart
    Strategy,
    /// Print the overall player advantage
    Advantage,
    /// Print one solver table
    Table {
        /// Which table to print
        name: TableName,
    },
    /// Recommend an action for a specific deal
    Advise {
        /// Player cards as rank characters (e.g. A7, T66)
        player: String,
        /// Dealer cards as rank characters (e.g. T6)
        dealer: String,
    },
    /// Dump every table and the advantage as JSON
    Export {
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

pub fn run() {
    let cli = Cli::parse();
    if let Err(e) = dispatch(cli) {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}

pub fn run_with_args(args: Vec<String>) {
    let cli = Cli::parse_from(args);
    if let Err(e) = dispatch(cli) {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}

fn dispatch(cli: Cli) -> BjResult<()> {
    let solution = solver::calculate()?;
    match cli.command {
        Commands::Strategy => cmd_strategy(&solution),
        Commands::Advantage => cmd_advantage(&solution),
        Commands::Table { name } => cmd_table(&solution, name),
        Commands::Advise { player, dealer } => cmd_advise(&solution, &player, &dealer),
        Commands::Export { output } => cmd_export(&solution, output),
    }
}

fn cmd_strategy(solution: &Solution) -> BjResult<()> {
    print_section("Optimal strategy (rows: player, columns: dealer)");
    println!("{}", strategy_table(&solution.strategy));
    println!("{}", strategy_legend());
    println!();
    Ok(())
}

fn cmd_advantage(solution: &Solution) -> BjResult<()> {
    let pct = solution.advantage * 100.0;
    let styled = if solution.advantage >= 0.0 {
        format!("{:+.4}%", pct).green().bold().to_string()
    } else {
        format!("{:+.4}%", pct).red().bold().to_string()
    };
    println!();
    println!("  Player advantage: {} of the initial wager", styled);
    println!();
    Ok(())
}

fn cmd_table(solution: &Solution, name: TableName) -> BjResult<()> {
    let rendered = match name {
        TableName::Initial => percent_table(&solution.initial),
        TableName::Dealer => dealer_table(&solution.dealer),
        TableName::Stand => ev_table(&solution.stand),
        TableName::Hit => ev_table(&solution.hit),
        TableName::Double => ev_table(&solution.double),
        TableName::Split => ev_table(&solution.split),
        TableName::Optimal => ev_table(&solution.optimal),
        TableName::Strategy => strategy_table(&solution.strategy),
    };
    println!();
    println!("{}", rendered);
    println!();
    Ok(())
}

fn cmd_advise(solution: &Solution, player: &str, dealer: &str) -> BjResult<()> {
    let player_hand = Hand::with_cards(parse_ranks(player)?, false);
    let dealer_hand = Hand::with_cards(parse_ranks(dealer)?, true);
    let player_code = player_hand.code(false);
    let dealer_code = dealer_hand.code(false);

    print_section(&format!(
        "Player {} ({})  vs  dealer {} ({})",
        player.to_uppercase(),
        player_code,
        dealer.to_uppercase(),
        dealer_code,
    ));

    if player_code == BUST_CODE {
        println!("  Busted: the wager is lost before any decision.");
        println!();
        return Ok(());
    }
    if player_code == "BJ" && dealer_code == "BJ" {
        println!("  Both blackjack: push, the wager is returned.");
        println!();
        return Ok(());
    }
    if player_code == "BJ" {
        println!("  Blackjack: paid 3:2, {} units.", "+1.5".green().bold());
        println!();
        return Ok(());
    }
    if dealer_code == "BJ" {
        println!("  Dealer blackjack: the wager is lost outright.");
        println!();
        return Ok(());
    }
    if player_code == "21" {
        println!("  Twenty-one: stand, no draw can improve it.");
        println!();
        return Ok(());
    }
    if !DEALER_CODE.contains(&dealer_code.as_str()) {
        println!(
            "  The dealer hand is already final ({}); no decision table applies.",
            dealer_code
        );
        println!();
        return Ok(());
    }

    let choices = solution.advice(&player_code, &dealer_code)?;
    let (_, best_ev) = strategy::select(&choices);
    let cell = solution.strategy.value(&player_code, &dealer_code)?;

    let mut grid = Grid::new();
    grid.set_content_arrangement(ContentArrangement::Dynamic);
    grid.set_header(vec![Cell::new("Action"), Cell::new("EV")]);
    for (action, ev) in &choices {
        let text = format!("{:+.4}", ev);
        let styled = if *ev == best_ev {
            text.bold().to_string()
        } else {
            text.dimmed().to_string()
        };
        grid.add_row(vec![
            Cell::new(action.name()),
            Cell::new(styled).set_alignment(CellAlignment::Right),
        ]);
    }
    println!("{}", grid);
    println!();
    println!(
        "  Recommended: {}  {}  (EV {:+.4})",
        styled_decision(&cell),
        describe_decision(&cell),
        best_ev,
    );
    println!();
    Ok(())
}

fn cmd_export(solution: &Solution, output: Option<PathBuf>) -> BjResult<()> {
    let json = serde_json::to_string_pretty(&solution.to_json())?;
    match output {
        Some(path) => {
            std::fs::write(&path, json)?;
            println!("Solution written to {}", path.display());
        }
        None => println!("{}", json),
    }
    Ok(())
}
