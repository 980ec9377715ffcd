use clap::{Parser, Subcommand};
use keyed_heap::Order;
use std::error::Error;

mod cli;
mod utils;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Schedule random timers, re-arm some of them and drain the heap in deadline order
    Simulate {
        /// Which end of the deadline range is popped first
        #[arg(short, long, default_value_t = Order::Min)]
        order: Order,

        /// Number of timers to insert
        #[arg(short, long, default_value_t = 10_000)]
        timers: usize,

        /// Number of random deadline updates
        #[arg(short, long, default_value_t = 10_000)]
        updates: usize,

        /// Seed for the workload generator. Random if omitted.
        #[arg(short, long)]
        seed: Option<u64>,

        /// Verify the heap invariants after every operation
        #[arg(long)]
        validate: bool,
    },
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    cli::init_logging();

    match args.command {
        Command::Simulate {
            order,
            timers,
            updates,
            seed,
            validate,
        } => cli::simulate::simulate(cli::simulate::Workload {
            order,
            timers,
            updates,
            seed: seed.unwrap_or_else(|| fastrand::u64(..)),
            validate,
        }),
    }
}
