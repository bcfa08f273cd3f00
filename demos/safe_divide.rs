//! Safe division: chaining fallible arithmetic with map and bind.
//!
//! Run with: cargo run --example safe_divide

use expected::{bind, fmap, Expected};

fn safe_divide(a: i32, b: i32) -> Expected<i32, String> {
    if b != 0 {
        Expected::value(a / b)
    } else {
        Expected::error("cannot divide by zero".to_string())
    }
}

fn report(label: &str, result: &Expected<i32, String>) {
    match result {
        Expected::Value(v) => println!("{label}: {v}"),
        Expected::Error(e) => println!("{label}: error: {e}"),
    }
}

fn main() {
    println!("=== Safe Division ===\n");

    let add_one = |x: i32| x + 1;
    let safe_divide_27 = |x: i32| safe_divide(27, x);

    // 14 / 7 = 2, + 1 = 3, 27 / 3 = 9
    let nine = bind(fmap(add_one, safe_divide(14, 7)), safe_divide_27);
    report("27 / ((14 / 7) + 1)", &nine);

    // The zero divisor stops the chain before add_one runs
    let stopped = safe_divide(14, 0).map(add_one).bind(safe_divide_27);
    report("27 / ((14 / 0) + 1)", &stopped);

    let direct = Expected::value(0).bind(safe_divide_27);
    report("27 / 0", &direct);

    println!("\n=== Complete ===");
}
