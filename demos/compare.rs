extern crate decmul;
use decmul::*;

use std::env;
use std::process;

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    let (a, b) = match args.as_slice() {
        [a, b] => (a.as_str(), b.as_str()),
        [] => ("123", "456"),
        _ => {
            eprintln!("usage: compare [<digits> <digits>]");
            process::exit(2);
        }
    };

    let x = match parse(a) {
        Ok(x) => x,
        Err(err) => {
            eprintln!("first operand: {}", err);
            process::exit(1);
        }
    };
    let y = match parse(b) {
        Ok(y) => y,
        Err(err) => {
            eprintln!("second operand: {}", err);
            process::exit(1);
        }
    };

    let ctx = Context::default();
    println!("{} x {}", format(&x), format(&y));
    for &algorithm in Algorithm::ALL.iter() {
        println!("{:>12}: {}", algorithm, ctx.multiply(algorithm, &x, &y));
    }

    let (_, trace) = multiply_karatsuba_traced(&x, &y, ctx.karatsuba_threshold());
    println!(
        "karatsuba threshold {}: depth {}, splits {}, base cases {}",
        ctx.karatsuba_threshold(), trace.max_depth, trace.splits, trace.base_cases,
    );

    let counts = multiply_vedic(&x, &y).counts;
    println!(
        "vedic: {} multiplies, {} column adds, {} carrying adds",
        counts.multiply_count, counts.base_add_count, counts.carry_add_count,
    );

    match multiply_native_u64(&x, &y) {
        Some(p) => println!("native u128: {}", p),
        None => println!("native u128: operands exceed u64"),
    }
}
