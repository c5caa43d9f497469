use std::collections::VecDeque;
use std::error::Error;

use slicebatch::newton;

struct Args {
    values: Vec<f64>,
    eps: f64,
}

fn parse_args() -> Result<Args, lexopt::Error> {
    use lexopt::prelude::*;

    let mut values = VecDeque::new();
    let mut eps = 1e-4;
    let mut parser = lexopt::Parser::from_env();

    while let Some(arg) = parser.next()? {
        match arg {
            Value(val) => values.push_back(val.parse::<f64>()?),
            Short('e') | Long("eps") => eps = parser.value()?.parse()?,
            Long("help") => {
                println!(
                    "Approximate square roots by Newton-Raphson iteration.

Usage: {bin_name} [-e <eps>] [<n>...]

Args:

  <n> - Numbers to take the square root of. Defaults to 3, 8 and 15.

Options:

  -e, --eps - Convergence tolerance. Defaults to 1e-4.
",
                    bin_name = parser.bin_name().unwrap_or("sqrt_demo")
                );
                std::process::exit(0);
            }
            _ => return Err(arg.unexpected()),
        }
    }

    let values = if values.is_empty() {
        vec![3., 8., 15.]
    } else {
        values.into()
    };

    Ok(Args { values, eps })
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = parse_args()?;

    for n in args.values {
        match newton::sqrt(1.0, args.eps, n) {
            Some(approx) => {
                println!("sqrt({}) = {:.6} (std: {:.6})", n, approx, n.sqrt())
            }
            None => println!("sqrt({}) did not converge", n),
        }
    }

    Ok(())
}
