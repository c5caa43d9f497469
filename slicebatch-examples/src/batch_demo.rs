use std::collections::VecDeque;
use std::error::Error;

use slicebatch::batch::{batches, RemainderPolicy};

struct Args {
    start: usize,
    len: usize,
    count: usize,
    policy: RemainderPolicy,
}

fn parse_args() -> Result<Args, lexopt::Error> {
    use lexopt::prelude::*;

    let mut values = VecDeque::new();
    let mut policy = RemainderPolicy::FoldIntoLast;
    let mut start = 0;
    let mut parser = lexopt::Parser::from_env();

    while let Some(arg) = parser.next()? {
        match arg {
            Value(val) => values.push_back(val.parse::<usize>()?),
            Long("extra") => policy = RemainderPolicy::ExtraBatch,
            Short('s') | Long("start") => start = parser.value()?.parse()?,
            Long("help") => {
                println!(
                    "Split an integer sequence into batches.

Usage: {bin_name} [--extra] [--start <n>] [<len>] [<count>]

Args:

  <len>   - Sequence length. Defaults to 34.
  <count> - Number of batches. Defaults to 5.

Options:

  --extra       - Put leftover elements in an extra trailing batch instead
                  of widening the final one.
  -s, --start n - First value of the sequence. Defaults to 0.
",
                    bin_name = parser.bin_name().unwrap_or("batch_demo")
                );
                std::process::exit(0);
            }
            _ => return Err(arg.unexpected()),
        }
    }

    let len = values.pop_front().unwrap_or(34);
    let count = values.pop_front().unwrap_or(5);

    Ok(Args {
        start,
        len,
        count,
        policy,
    })
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = parse_args()?;
    let seq: Vec<usize> = (args.start..args.start + args.len).collect();

    for (i, batch) in batches(&seq, args.count, args.policy)?.enumerate() {
        println!("batch {} ({} items): {:?}", i, batch.len(), batch);
    }

    Ok(())
}
