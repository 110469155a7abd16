//! Scripted demo runs. The binaries only wire stdin/stdout and config into
//! these functions.

use std::io::{BufRead, Write};

use regex::Regex;
use tracing::{info, warn};

use crate::config::{DemoConfig, PatternConfig, PhoneReplacer};
use crate::display::{section, show_collection, show_groups};
use crate::error::Result;
use crate::pattern::{self, PatternValidator, Prompt};
use crate::product::PricedModel;
use crate::query::{Enumerable, Source, is_two_digits};

/// Walks through filtering, sorting, projection, aggregation, lookups,
/// grouping and deferred execution.
///
/// A lookup that finds nothing ends the run with `Error::NotFound`.
pub fn run_query_demo<W: Write>(config: &DemoConfig, out: &mut W) -> Result<()> {
    let colors = Source::new(config.query.colors.clone());
    let numbers = Source::new(config.query.numbers.clone());
    let products = Source::new(config.query.products.clone());

    show_collection(out, &numbers, Some("Original"))?;

    info!("filtering");
    section(out, "Filter")?;
    show_collection(out, &numbers.query().filter(is_two_digits), Some("Filtered"))?;
    show_collection(
        out,
        &products.query().filter(|p| p.price > 1000),
        Some("Price > 1000"),
    )?;

    info!("sorting");
    section(out, "Sort")?;
    show_collection(
        out,
        &numbers.query().sort_by(|x| x.to_string().chars().last()),
        Some("Sorted"),
    )?;
    show_collection(out, &products.query().sort_by(|p| p.price), Some("By Price"))?;
    show_collection(
        out,
        &colors.query().sort_by_descending(|c| c.len()),
        Some("Colors by length"),
    )?;

    info!("projecting");
    section(out, "Map")?;
    show_collection(out, &numbers.query().map(|x| x.abs()), Some("Modules"))?;
    show_collection(out, &numbers.query().map(|x| format!("<{x}>")), Some("Tags"))?;
    show_collection(out, &products.query().map(|p| p.model), Some("Models"))?;
    show_collection(
        out,
        &products.query().map(|p| PricedModel::from_product(&p, 42)),
        Some("Priced"),
    )?;

    info!("aggregating");
    section(out, "Aggregate")?;
    writeln!(out, "Max number: {}", numbers.max()?)?;
    writeln!(out, "Total price: {}", products.checked_sum_of(|p| i64::from(p.price))?)?;
    writeln!(out, "Avg price: {:.2}", products.average_of(|p| f64::from(p.price))?)?;
    writeln!(out, "The cheapest product: {}", products.min_of(|p| p.price)?)?;
    writeln!(out, "Even numbers: {}", numbers.count_where(|x| x % 2 == 0))?;
    writeln!(out, "Negative numbers: {}", numbers.count_where(|x| *x < 0))?;

    info!("taking");
    section(out, "Take")?;
    show_collection(
        out,
        &numbers.query().sort_by_descending(|x| *x).take(3),
        Some("TOP 3"),
    )?;
    show_collection(
        out,
        &products.query().sort_by_descending(|p| p.price).take(2),
        Some("TOP 2 Products"),
    )?;

    info!("looking up");
    section(out, "First / Last")?;
    writeln!(out, "First number: {}", numbers.first_where(|x| *x < 0)?)?;
    writeln!(
        out,
        "Last number: {}",
        numbers.last_where(|x| x % 10 == 0 && *x > 0)?
    )?;
    match products.first_or_none_where(|p| p.category == "Auto") {
        Some(car) => writeln!(out, "First auto: {car}")?,
        None => writeln!(out, "Product not found!")?,
    }

    info!("grouping");
    section(out, "Group")?;
    show_groups(
        out,
        &products.query().group_by(|p| p.category.clone()),
        Some("Products by Category"),
    )?;
    show_groups(
        out,
        &numbers
            .query()
            .group_by(|x| x.unsigned_abs().to_string().len()),
        Some("Numbers by digits"),
    )?;

    info!("deferred execution");
    section(out, "Deferred execution")?;
    let negatives = numbers.query().filter(|x| *x < 0).sort_by(|x| *x);
    let index = config.query.mutate_index;
    match numbers.set(index, config.query.mutate_value) {
        Some(previous) => writeln!(
            out,
            "numbers[{index}] = {} (was {previous}) after the query was built",
            config.query.mutate_value
        )?,
        None => {
            warn!(index, len = numbers.len(), "write out of bounds");
            writeln!(
                out,
                "numbers[{index}] does not exist ({} elements), write skipped",
                numbers.len()
            )?
        }
    }
    show_collection(out, &negatives, Some("Negative numbers"))?;

    Ok(())
}

/// Validation loop, match-testing loop, then capture-group substitution.
pub fn run_pattern_demo<R, W>(config: &PatternConfig, input: &mut R, out: &mut W) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    info!(pattern = %config.email_pattern, "validation loop");
    let validator = PatternValidator::new(&config.email_pattern)?;
    pattern::prompt_until_valid(input, out, &validator, Prompt::EMAIL)?;

    write!(out, "\n\n\n")?;
    info!(pattern = %config.word_pattern, "match loop");
    let word = Regex::new(&config.word_pattern)?;
    let summary = pattern::match_loop(input, out, &word, &config.exit_word)?;
    info!(matched = summary.matched, rejected = summary.rejected, "match loop done");

    let phones = match config.phone_replacer {
        PhoneReplacer::Template => pattern::format_phone_numbers(&config.phone_text),
        PhoneReplacer::Closure => pattern::format_phone_numbers_with(&config.phone_text),
    };
    writeln!(out, "{phones}")?;
    Ok(())
}
