use anyhow::{Context, Result};
use colored::Colorize;
use std::process::{Command, Output};
use std::time::Instant;

/// What a failing step does to the whole task.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum OnFailure {
    Abort,
    Warn,
}

/// One `cargo` invocation with a human label.
pub struct Step<'a> {
    pub label: &'a str,
    pub args: &'a [&'a str],
    pub on_failure: OnFailure,
}

impl<'a> Step<'a> {
    pub const fn required(label: &'a str, args: &'a [&'a str]) -> Self {
        Self {
            label,
            args,
            on_failure: OnFailure::Abort,
        }
    }

    pub const fn advisory(label: &'a str, args: &'a [&'a str]) -> Self {
        Self {
            label,
            args,
            on_failure: OnFailure::Warn,
        }
    }

    /// Run the step. `Ok(Some(output))` on success, `Ok(None)` on a tolerated
    /// failure.
    pub fn run(&self) -> Result<Option<Output>> {
        println!("{}", format!("  {}...", self.label).cyan());
        let start = Instant::now();

        let output = Command::new("cargo")
            .args(self.args)
            .output()
            .with_context(|| format!("Failed to spawn cargo for {}", self.label))?;

        if output.status.success() {
            let summary = test_summary(&String::from_utf8_lossy(&output.stdout))
                .map(|s| format!(" {s}"))
                .unwrap_or_default();
            println!(
                "{}",
                format!(
                    "  ✓ {}{} in {:.2}s",
                    self.label,
                    summary,
                    start.elapsed().as_secs_f64()
                )
                .green()
            );
            println!();
            return Ok(Some(output));
        }

        match self.on_failure {
            OnFailure::Abort => {
                eprintln!("{}", format!("  ✗ {} failed", self.label).red().bold());
                eprintln!();
                for line in String::from_utf8_lossy(&output.stdout).lines() {
                    eprintln!("  {line}");
                }
                eprintln!("{}", String::from_utf8_lossy(&output.stderr));
                anyhow::bail!("{} failed", self.label);
            }
            OnFailure::Warn => {
                eprintln!("{}", format!("  ⚠ {} reported problems", self.label).yellow().bold());
                eprintln!("{}", String::from_utf8_lossy(&output.stderr));
                println!();
                Ok(None)
            }
        }
    }
}

/// Run `steps` in order, stopping at the first required failure.
pub fn run_all(title: &str, steps: &[Step<'_>]) -> Result<()> {
    println!();
    println!("{}", title.cyan().bold());
    println!();

    let total_start = Instant::now();
    for step in steps {
        step.run()?;
    }

    println!(
        "{}",
        format!("✓ Done in {:.2}s", total_start.elapsed().as_secs_f64())
            .green()
            .bold()
    );
    println!();
    Ok(())
}

/// Pull "ok. 5 passed; 0 failed; ..." out of libtest output, summed over
/// every test binary.
fn test_summary(output: &str) -> Option<String> {
    let mut passed = 0usize;
    let mut failed = 0usize;
    let mut seen = false;

    for line in output.lines() {
        let Some(rest) = line.split("test result:").nth(1) else {
            continue;
        };
        seen = true;
        for part in rest.split(';') {
            let mut words = part.split_whitespace().rev();
            let (Some(kind), Some(count)) = (words.next(), words.next()) else {
                continue;
            };
            let Ok(count) = count.parse::<usize>() else {
                continue;
            };
            match kind {
                "passed" => passed = passed.saturating_add(count),
                "failed" => failed = failed.saturating_add(count),
                _ => {}
            }
        }
    }

    seen.then(|| format!("({passed} passed, {failed} failed)"))
}
