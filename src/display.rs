use colored::Colorize;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table as Grid};

use crate::codes::DEALER_CODE;
use crate::dealer::DealerOutcomes;
use crate::strategy::Action;
use crate::table::Table;

fn grid_with_header(corner: &str, columns: &[&str]) -> Grid {
    let mut grid = Grid::new();
    grid.set_content_arrangement(ContentArrangement::Dynamic);
    let mut header = vec![Cell::new(corner)];
    for &col in columns {
        header.push(Cell::new(col).set_alignment(CellAlignment::Center));
    }
    grid.set_header(header);
    grid
}

/// Render an EV table: rows are player codes, columns dealer codes, cells
/// signed EVs colored by sign.
pub fn ev_table(table: &Table<f64>) -> String {
    let mut grid = grid_with_header(table.name(), table.xlabels());
    for &row in table.ylabels() {
        let mut cells = vec![Cell::new(row.bold().to_string())];
        for &col in table.xlabels() {
            let text = match table.get(row, col) {
                Ok(Some(&ev)) => {
                    let s = format!("{:+.4}", ev);
                    if ev >= 0.0 {
                        s.green().to_string()
                    } else {
                        s.red().to_string()
                    }
                }
                _ => "\u{00b7}".dimmed().to_string(),
            };
            cells.push(Cell::new(text).set_alignment(CellAlignment::Right));
        }
        grid.add_row(cells);
    }
    grid.to_string()
}

/// Render a probability table as percentages.
pub fn percent_table(table: &Table<f64>) -> String {
    let mut grid = grid_with_header(table.name(), table.xlabels());
    for &row in table.ylabels() {
        let mut cells = vec![Cell::new(row.bold().to_string())];
        for &col in table.xlabels() {
            let text = match table.get(row, col) {
                Ok(Some(&p)) => format!("{:.4}%", p * 100.0),
                _ => "\u{00b7}".dimmed().to_string(),
            };
            cells.push(Cell::new(text).set_alignment(CellAlignment::Right));
        }
        grid.add_row(cells);
    }
    grid.to_string()
}

const DEALER_SCORES: &[(u32, &str)] = &[
    (0, "Bust"),
    (17, "17"),
    (18, "18"),
    (19, "19"),
    (20, "20"),
    (21, "21"),
];

/// Render the dealer outcome distributions, one row per starting code.
pub fn dealer_table(outcomes: &DealerOutcomes) -> String {
    let columns: Vec<&str> = DEALER_SCORES.iter().map(|&(_, label)| label).collect();
    let mut grid = grid_with_header("dealer", &columns);
    let rows = DEALER_CODE.iter().copied().chain(std::iter::once("21"));
    for code in rows {
        let dist = match outcomes.distribution(code) {
            Ok(dist) => dist,
            Err(_) => continue,
        };
        let mut cells = vec![Cell::new(code.bold().to_string())];
        for &(score, _) in DEALER_SCORES {
            let text = match dist.get(&score) {
                Some(&p) => format!("{:.4}", p),
                None => "\u{00b7}".dimmed().to_string(),
            };
            cells.push(Cell::new(text).set_alignment(CellAlignment::Right));
        }
        grid.add_row(cells);
    }
    grid.to_string()
}

/// Render the strategy chart with one colored cell per decision.
pub fn strategy_table(strategy: &Table<String>) -> String {
    let mut grid = grid_with_header("player", strategy.xlabels());
    for &row in strategy.ylabels() {
        let mut cells = vec![Cell::new(row.bold().to_string())];
        for &col in strategy.xlabels() {
            let text = match strategy.get(row, col) {
                Ok(Some(cell)) => styled_decision(cell),
                _ => "\u{00b7}".dimmed().to_string(),
            };
            cells.push(Cell::new(text).set_alignment(CellAlignment::Center));
        }
        grid.add_row(cells);
    }
    grid.to_string()
}

/// Color a strategy cell by its primary action letter.
pub fn styled_decision(cell: &str) -> String {
    match cell.chars().next().and_then(Action::from_letter) {
        Some(Action::Stand) => cell.green().bold().to_string(),
        Some(Action::Hit) => cell.red().bold().to_string(),
        Some(Action::Double) => cell.cyan().bold().to_string(),
        Some(Action::Split) => cell.magenta().bold().to_string(),
        Some(Action::Surrender) => cell.yellow().bold().to_string(),
        None => cell.to_string(),
    }
}

/// Spell out a strategy cell, fallback letter included: "Dh" becomes
/// "double (hit if doubling is unavailable)".
pub fn describe_decision(cell: &str) -> String {
    let mut letters = cell.chars();
    let primary = match letters.next().and_then(Action::from_letter) {
        Some(action) => action,
        None => return cell.to_string(),
    };
    match letters.next().and_then(Action::from_letter) {
        Some(alternate) => format!(
            "{} ({} if {} is unavailable)",
            primary.name(),
            alternate.name(),
            gerund(primary),
        ),
        None => primary.name().to_string(),
    }
}

fn gerund(action: Action) -> &'static str {
    match action {
        Action::Surrender => "surrendering",
        Action::Stand => "standing",
        Action::Hit => "hitting",
        Action::Double => "doubling",
        Action::Split => "splitting",
    }
}

pub fn strategy_legend() -> String {
    format!(
        "  {}tand  {}it  {}ouble  s{}lit  surrende{}  (lowercase: fallback when the primary is unavailable)",
        "S".green().bold(),
        "H".red().bold(),
        "D".cyan().bold(),
        "P".magenta().bold(),
        "R".yellow().bold(),
    )
}

pub fn print_error(msg: &str) {
    eprintln!("{} {}", "Error:".red().bold(), msg);
}

pub fn print_section(title: &str) {
    println!();
    println!("{}", title.cyan().bold());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_decision() {
        assert_eq!(
            describe_decision("Dh"),
            "double (hit if doubling is unavailable)"
        );
        assert_eq!(describe_decision("S"), "stand");
        assert_eq!(
            describe_decision("Ps"),
            "split (stand if splitting is unavailable)"
        );
    }
}
