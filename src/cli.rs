//! CLI definition and dispatch.

use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::adapters::csv_adapter::CsvAdapter;
use crate::adapters::svg_chart;
use crate::domain::error::MatraderError;
use crate::ports::data_port::DataPort;
use crate::session::Session;

#[derive(Parser, Debug)]
#[command(name = "matrader", about = "Moving-average crossover backtester")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run a crossover backtest over a price file
    Backtest {
        /// Delimited price file with a header row
        #[arg(short, long)]
        data: PathBuf,
        /// Short moving-average window in bars
        #[arg(long, default_value_t = 20)]
        short: usize,
        /// Long moving-average window in bars
        #[arg(long, default_value_t = 50)]
        long: usize,
        /// Write an SVG chart of price, averages, and trade markers
        #[arg(short, long)]
        chart: Option<PathBuf>,
    },
    /// Show date range and bar count for a price file
    Info {
        #[arg(short, long)]
        data: PathBuf,
    },
}

pub fn run(cli: Cli) -> ExitCode {
    match cli.command {
        Command::Backtest {
            data,
            short,
            long,
            chart,
        } => run_backtest_cmd(&data, short, long, chart.as_ref()),
        Command::Info { data } => run_info(&data),
    }
}

fn run_backtest_cmd(
    data: &PathBuf,
    short: usize,
    long: usize,
    chart: Option<&PathBuf>,
) -> ExitCode {
    let mut session = Session::new(CsvAdapter::new());

    eprintln!("Loading prices from {}", data.display());
    let count = match session.load(data) {
        Ok(n) => n,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };
    eprintln!("  {} bars loaded", count);

    let result = match session.run(short, long) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    eprintln!("\n=== Backtest Results (SMA {}/{}) ===", short, long);
    eprintln!("Total Profit:     {:.2}%", result.total_profit_pct);
    eprintln!("Trades Closed:    {}", result.trade_count());

    if !result.trades.is_empty() {
        eprintln!("\n=== Trades ===");
        for trade in &result.trades {
            eprintln!(
                "  {} -> {}:  {:.2} -> {:.2}  ({:+.2}%)",
                trade.entry_date,
                trade.exit_date,
                trade.entry_price,
                trade.exit_price,
                trade.profit_pct,
            );
        }
    }

    if let Some(chart_path) = chart {
        let svg = svg_chart::render_chart(session.chart_series());
        match fs::write(chart_path, svg) {
            Ok(()) => eprintln!("\nChart written to: {}", chart_path.display()),
            Err(e) => {
                eprintln!("error: failed to write chart: {e}");
                return ExitCode::from(1);
            }
        }
    }

    ExitCode::SUCCESS
}

fn run_info(data: &PathBuf) -> ExitCode {
    let bars = match CsvAdapter::new().load_bars(data) {
        Ok(b) => b,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    match (bars.first(), bars.last()) {
        (Some(first), Some(last)) => {
            println!("{} bars, {} to {}", bars.len(), first.date, last.date);
            ExitCode::SUCCESS
        }
        _ => {
            eprintln!("error: no bars found in {}", data.display());
            (&MatraderError::NoData).into()
        }
    }
}
