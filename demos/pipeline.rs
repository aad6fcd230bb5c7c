use typed_store::{StoreError, TypedStore};

/// A stage reads what earlier stages left behind and adds its own results.
trait Stage {
    fn name(&self) -> &'static str;
    fn run(&self, scratch: &mut TypedStore<'_>) -> Result<(), StoreError>;
}

struct Tokenize;
struct Count;
struct Report;

#[derive(Debug)]
struct WordCounts {
    total: usize,
    longest: String,
}

impl Stage for Tokenize {
    fn name(&self) -> &'static str {
        "tokenize"
    }

    fn run(&self, scratch: &mut TypedStore<'_>) -> Result<(), StoreError> {
        let tokens: Vec<String> = scratch
            .get::<String>("input")?
            .split_whitespace()
            .map(|word| word.trim_matches(|c: char| !c.is_alphanumeric()).to_lowercase())
            .filter(|word| !word.is_empty())
            .collect();
        scratch.insert_owned(tokens, "tokens");
        Ok(())
    }
}

impl Stage for Count {
    fn name(&self) -> &'static str {
        "count"
    }

    fn run(&self, scratch: &mut TypedStore<'_>) -> Result<(), StoreError> {
        let counts = scratch.with("tokens", |tokens: &Vec<String>| WordCounts {
            total: tokens.len(),
            longest: tokens
                .iter()
                .max_by_key(|word| word.len())
                .cloned()
                .unwrap_or_default(),
        })?;
        scratch.insert_owned(counts, "counts");

        // Bump the caller's run counter, which the store only borrows.
        *scratch.get_mut::<u32>("runs")? += 1;
        Ok(())
    }
}

impl Stage for Report {
    fn name(&self) -> &'static str {
        "report"
    }

    fn run(&self, scratch: &mut TypedStore<'_>) -> Result<(), StoreError> {
        let counts = scratch.get::<WordCounts>("counts")?;
        let report = format!(
            "{} words, longest is {:?}",
            counts.total, counts.longest
        );
        scratch.insert_owned(report, "report");
        Ok(())
    }
}

fn main() -> Result<(), StoreError> {
    env_logger::init();

    let stages: Vec<Box<dyn Stage>> = vec![Box::new(Tokenize), Box::new(Count), Box::new(Report)];
    let mut runs = 0_u32;

    for input in ["The quick brown fox.", "Jumps over the extraordinarily lazy dog!"] {
        let mut scratch = TypedStore::new();
        scratch.insert_owned(input.to_string(), "input");
        scratch.insert_alias(&mut runs, "runs");

        for stage in &stages {
            stage.run(&mut scratch)?;
            println!("after {:<8} {:?}", stage.name(), scratch);
        }

        println!("report: {}", scratch.get::<String>("report")?);

        // A stage asking for the wrong type gets an error, not a default.
        match scratch.get::<Vec<&'static str>>("tokens") {
            Ok(tokens) => println!("unexpected tokens: {:?}", tokens),
            Err(e) => println!("expected failure: {}", e),
        }
    }

    println!("pipeline ran {} times", runs);
    Ok(())
}
