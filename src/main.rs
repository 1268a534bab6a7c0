use clap::Parser;
use singly_linked_list::{LinkedList, ListError};

/// Contains information parsed from the command-line invocation of the demo. The Clap macros
/// provide a fancy way to automatically construct a command-line argument parser.
#[derive(Parser, Debug)]
#[command(about = "Walk through the operations of a singly linked list")]
struct CmdOptions {
    /// Build and drop a list with this many elements after the walkthrough (0 = skip)
    #[arg(long, default_value = "0")]
    stress: usize,
    /// Skip the scripted push/pop/remove walkthrough
    #[arg(long)]
    skip_scenario: bool,
}

fn main() {
    // Initialize the logging library. Set RUST_LOG=trace to see the list's own diagnostics.
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info");
    }
    pretty_env_logger::init();

    let options = CmdOptions::parse();
    log::debug!("Parsed options: {:?}", options);

    if !options.skip_scenario {
        if let Err(err) = run_scenario() {
            log::error!("Walkthrough failed: {}", err);
            std::process::exit(1);
        }
    }

    if options.stress > 0 {
        stress(options.stress);
    }
}

fn run_scenario() -> Result<(), ListError> {
    let mut list: LinkedList<i32> = LinkedList::new();

    println!("Testing push_front...");
    list.push_front(10);
    list.push_front(20);
    list.push_front(30);
    println!("{}", list);

    println!("Testing push_back...");
    list.push_back(5);
    list.push_back(15);
    list.push_back(25);
    println!("{}", list);

    println!("Testing insert_after...");
    list.insert_after(2, 20);
    println!("{}", list);

    println!("Testing pop_front...");
    println!("Popped front value: {}", list.pop_front()?);
    println!("{}", list);

    println!("Testing pop_back...");
    println!("Popped back value: {}", list.pop_back()?);
    println!("{}", list);

    println!("Testing remove value...");
    list.remove(&15)?;
    println!("{}", list);

    println!("Testing remove at index...");
    list.remove_at(2)?;
    println!("{}", list);

    println!("Testing get_front, get_back, get_at...");
    println!("Front value: {}", list.get_front()?);
    println!("Back value: {}", list.get_back()?);
    println!("Value at index 1: {}", list.get_at(1)?);

    println!("Testing size and is_empty...");
    println!("List size: {}", list.size());
    println!(
        "Is the list empty? {}",
        if list.is_empty() { "Yes" } else { "No" }
    );

    println!("Testing errors on an empty list...");
    let empty: LinkedList<i32> = LinkedList::new();
    match empty.get_front() {
        Ok(value) => log::warn!("Empty list unexpectedly returned {}", value),
        Err(err) => println!("get_front on empty list: {}", err),
    }
    match list.get_at(-1) {
        Ok(value) => log::warn!("Negative index unexpectedly returned {}", value),
        Err(err) => println!("get_at(-1): {}", err),
    }
    Ok(())
}

fn stress(count: usize) {
    log::info!("Building a list of {} elements", count);
    let list: LinkedList<usize> = (0..count).collect();
    log::info!("Built list, size {}; dropping it", list.size());
    drop(list);
    log::info!("Dropped list of {} elements", count);
}
