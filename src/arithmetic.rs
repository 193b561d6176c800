//! Arithmetic and formatting warm-ups: small formulas, operator
//! sequencing and fixed-width output.

use std::f64::consts::PI;
use std::io::{BufRead, Write};

use anyhow::{Result, anyhow};

use crate::console::Console;

/// `None` when the sum does not fit in an `i64`.
pub fn sum(a: i64, b: i64) -> Option<i64> {
    a.checked_add(b)
}

pub fn average3(a: f64, b: f64, c: f64) -> f64 {
    (a + b + c) / 3.0
}

/// Compound assignment and increments evaluated strictly left to right,
/// starting from `a = 10, x = 5, y = 6`. Returns `(a, x, y)`.
pub fn increment_demo() -> (i32, i32, i32) {
    let mut a = 10;
    let mut x;
    let mut y = 6;

    // a += (a *= 6)
    a *= 6;
    a += a;
    // x = y++
    x = y;
    y += 1;
    // y = ++x
    x += 1;
    y = x;
    // a = x++ + y
    a = x + y;
    x += 1;

    (a, x, y)
}

pub fn format_demo() -> Vec<String> {
    let (a, b) = (5, 7);
    let (x, y) = (67.8564_f32, -789.124_f32);
    let c = 'A';

    vec![
        format!("{a:3}{b:3}"),
        format!("{x:10.6},{y:<10.6}"),
        format!("{x:8.2},{y:4.6}"),
        format!("{c},{},{:o},{:x}", c as u32, c as u32, c as u32),
    ]
}

pub fn half_sine_degrees(degrees: f64) -> f64 {
    0.5 * (degrees * PI / 180.0).sin()
}

pub fn fahrenheit_to_celsius(f: f64) -> f64 {
    5.0 / 9.0 * (f - 32.0)
}

pub fn total_price(quantity: i64, unit_price: i64) -> i64 {
    quantity * unit_price
}

pub fn swap<T>(a: T, b: T) -> (T, T) {
    (b, a)
}

/// `sin(sqrt(a * x)) + ln(a + x)`; NaN when either root or log is undefined.
pub fn sine_log(a: f64, x: f64) -> f64 {
    (a * x).sqrt().sin() + (a + x).ln()
}

pub fn cosine_exp(a: f64, x: f64) -> f64 {
    ((a + x).sqrt() + (a * x).exp()).cos()
}

/// Triangle area from its three sides (Heron's formula).
pub fn heron_area(a: f64, b: f64, c: f64) -> f64 {
    let s = (a + b + c) / 2.0;
    (s * (s - a) * (s - b) * (s - c)).sqrt()
}

/// Read `a,b`. Accepts `3,4`, `3, 4`, `3 ,4` and `3 , 4`.
fn read_pair<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<(i64, i64)> {
    let mut text = console.next_token()?;
    if !text.contains(',') {
        let rest = console.next_token()?;
        if !rest.starts_with(',') {
            return Err(anyhow!("expected 'a,b', got '{text} {rest}'"));
        }
        text.push_str(&rest);
    }
    if text.ends_with(',') {
        text.push_str(&console.next_token()?);
    }

    let (a, b) = text
        .split_once(',')
        .ok_or_else(|| anyhow!("expected 'a,b', got '{text}'"))?;
    let parse = |s: &str| {
        s.trim()
            .parse::<i64>()
            .map_err(|_| anyhow!("invalid number '{s}' in '{text}'"))
    };
    Ok((parse(a)?, parse(b)?))
}

pub fn run<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<()> {
    console.prompt("Please enter a,b: ")?;
    let (a, b) = read_pair(console)?;
    let total = sum(a, b).ok_or_else(|| anyhow!("{a}+{b} overflows"))?;
    console.say(&format!("{a}+{b}={total}"))?;

    console.prompt("Please enter a b c: ")?;
    let (a, b, c) = (console.next()?, console.next()?, console.next()?);
    console.say(&format!("average={:.6}", average3(a, b, c)))?;

    let (a, x, y) = increment_demo();
    console.say(&format!("{a},{x},{y}"))?;

    for line in format_demo() {
        console.say(&line)?;
    }

    console.prompt("Enter an angle in degrees: ")?;
    let d: i64 = console.next()?;
    console.say(&format!("x={:.6}", half_sine_degrees(d as f64)))?;

    console.prompt("Enter a temperature in Fahrenheit: ")?;
    let f: f64 = console.next()?;
    console.say(&format!("F={f:.2}"))?;
    console.say(&format!("c={:.2}", fahrenheit_to_celsius(f)))?;

    let quantity = 5;
    console.say(&format!("{quantity} {}", total_price(quantity, 30)))?;

    console.prompt("Enter a b: ")?;
    let (a, b): (i64, i64) = (console.next()?, console.next()?);
    console.say(&format!("a={a}b={b}"))?;
    let (a, b) = swap(a, b);
    console.say(&format!("a={a}b={b}"))?;

    console.prompt("Please enter a x: ")?;
    let (a, x) = (console.next()?, console.next()?);
    console.say(&format!("y={:.6}", sine_log(a, x)))?;

    console.prompt("Please enter a x: ")?;
    let (a, x) = (console.next()?, console.next()?);
    console.say(&format!("y={:.6}", cosine_exp(a, x)))?;

    console.say(&format!("area={:.6}", heron_area(3.5, 5.4, 4.3)))?;
    log::debug!("all arithmetic exercises done");
    Ok(())
}
