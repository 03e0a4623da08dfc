//! Walks through IEEE-754 encodings by hand: shows each step of the
//! manual conversion of decimal values, decodes bit strings and prints
//! the special-value table.

use anyhow::{Context as _, Result};
use clap::Parser;
use ieee754_codec::ieee754::{expand, normalize, split_sign, Fields};
use ieee754_codec::{Context, RoundingMode};

#[derive(clap::Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Use double precision (1 + 11 + 52 bits) instead of single precision
    #[arg(short, long, global = true)]
    double: bool,

    /// Round to nearest, ties to even, instead of truncating
    #[arg(short, long, global = true)]
    nearest_even: bool,

    /// Flush values below the normal range to zero
    #[arg(short, long, global = true)]
    flush: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Show the manual conversion of decimal values
    Encode {
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<f64>,
    },
    /// Decode bit strings, most significant bit first (spaces are ignored)
    Decode {
        #[arg(required = true)]
        bits: Vec<String>,
    },
    /// Print the special-value table and a summary of the format
    Table,
}

fn digits(bv: &ieee754_codec::ieee754::BitVec) -> String {
    bv.iter().map(|b| if *b { '1' } else { '0' }).collect()
}

fn show_encoding<const E: usize, const N: usize>(x: f64, ctx: &Context) {
    let m = Fields::<E, N>::M;
    println!("\nConverting {} to a {}-bit encoding:", x, N);

    let (s, magnitude) = split_sign(x);
    println!(
        "\n1. Sign bit: {} ({})",
        s as u8,
        if s { "negative" } else { "positive" }
    );

    match expand(magnitude, m) {
        Some(exp) => {
            let ellipsis = if exp.terminated { "" } else { "..." };
            println!("\n2. Binary representation:");
            println!("   Integer part:    {}", digits(&exp.integer));
            println!("   Fractional part: 0.{}{}", digits(&exp.fraction), ellipsis);
            println!(
                "   Combined:        {}.{}{}",
                digits(&exp.integer),
                digits(&exp.fraction),
                ellipsis
            );
        }
        None => println!("\n2. Binary representation: none ({})", magnitude),
    }

    match normalize(magnitude, m) {
        Some(form) => {
            let biased = form.exponent + Fields::<E, N>::BIAS;
            println!("\n3. Normalize to 1.xxxxx x 2^exponent:");
            println!("   Exponent: {}", form.exponent);
            println!(
                "   Mantissa: 1.{}{}",
                digits(&form.mantissa),
                if form.exact { "" } else { " (truncated)" }
            );
            println!(
                "\n4. Biased exponent: {} + {} = {}",
                form.exponent,
                Fields::<E, N>::BIAS,
                biased
            );
        }
        None => println!("\n3. Normalize: no leading 1, special case"),
    }

    let (field, flags) = Fields::<E, N>::encode_with_flags(x, ctx);
    println!("   Binary: {}", field.exponent_string());
    println!("\n5. Mantissa ({} bits): {}", m, field.mantissa_string());
    println!("\n6. Final IEEE 754 format:");
    println!("   Sign | Exponent | Mantissa");
    println!("   {:#}", field);
    println!("\n   Complete: {}", field);
    if flags.any() {
        println!(
            "   Exceptions: overflow={} underflow={} inexact={}",
            flags.overflow(),
            flags.underflow(),
            flags.inexact()
        );
    }

    let decoded = field.decode();
    println!("\nVerification: {} ({})", decoded, decoded.category());
}

fn show_decoding<const E: usize, const N: usize>(arg: &str) -> Result<()> {
    let cleaned: String = arg.chars().filter(|c| !c.is_whitespace()).collect();
    let field: Fields<E, N> = cleaned
        .parse()
        .with_context(|| format!("cannot decode {:?}", arg))?;
    let decoded = field.decode();

    println!("\n{:#}", field);
    println!(
        "  Sign:     {} ({})",
        field.sign() as u8,
        if field.sign() { "-" } else { "+" }
    );
    println!(
        "  Exponent: {} (biased: {}, actual: {})",
        field.exponent_string(),
        field.biased_exponent(),
        field.actual_exponent()
    );
    println!("  Mantissa: {}", field.mantissa_string());
    println!("  Category: {}", decoded.category());
    println!("  Value:    {}", decoded);
    Ok(())
}

fn show_table<const E: usize, const N: usize>(ctx: &Context) {
    let special = [
        (0.0, "Zero"),
        (-0.0, "Negative Zero"),
        (f64::INFINITY, "Positive Infinity"),
        (f64::NEG_INFINITY, "Negative Infinity"),
        (f64::NAN, "NaN"),
        (1.0, "One"),
        (-1.0, "Negative One"),
    ];

    println!("\nValue             | Sign | Exponent | Mantissa (first 8 bits)");
    println!("------------------|------|----------|------------------------");
    for (x, desc) in special {
        let field = Fields::<E, N>::encode_with(x, ctx);
        let mantissa = field.mantissa_string();
        println!(
            "{:17} | {:^4} | {} | {}...",
            desc,
            field.sign() as u8,
            field.exponent_string(),
            &mantissa[..mantissa.len().min(8)]
        );
    }

    let max = Fields::<E, N>::from_parts(false, Fields::<E, N>::EXP_SPECIAL - 1, u64::MAX);
    let min = Fields::<E, N>::from_parts(false, 1, 0);
    let decimal_digits = (Fields::<E, N>::PREC as f64 * std::f64::consts::LOG10_2).floor();
    println!("\n{}-bit format (1 + {} + {} bits):", N, E, Fields::<E, N>::M);
    println!("  Significant digits: ~{} decimal digits", decimal_digits);
    println!("  Range: +/-{:e} to +/-{:e}", min.value(), max.value());
    println!("  Exponent bias: {}", Fields::<E, N>::BIAS);
}

fn run<const E: usize, const N: usize>(command: &Command, ctx: &Context) -> Result<()> {
    match command {
        Command::Encode { values } => values.iter().for_each(|x| show_encoding::<E, N>(*x, ctx)),
        Command::Decode { bits } => {
            for arg in bits {
                show_decoding::<E, N>(arg)?;
            }
        }
        Command::Table => show_table::<E, N>(ctx),
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .without_time()
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let rm = if cli.nearest_even {
        RoundingMode::NearestEven
    } else {
        RoundingMode::Truncate
    };
    let ctx = Context::new().rounding_mode(rm).flush_subnormals(cli.flush);

    if cli.double {
        run::<11, 64>(&cli.command, &ctx)
    } else {
        run::<8, 32>(&cli.command, &ctx)
    }
}
