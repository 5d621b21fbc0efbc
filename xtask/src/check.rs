use anyhow::Result;

use crate::cargo::{run_all, Step};

const TARGET: &str = "thumbv7em-none-eabihf";

const CROSS_CHECKS: [(&str, &[&str]); 3] = [
    (
        "platform (no_std)",
        &["check", "-p", "platform", "--target", TARGET, "--features", "defmt"],
    ),
    (
        "touch (no_std)",
        &["check", "-p", "touch", "--target", TARGET, "--features", "defmt"],
    ),
    (
        "backlight (no_std)",
        &["check", "-p", "backlight", "--target", TARGET, "--features", "defmt"],
    ),
];

pub fn run(host_only: bool) -> Result<()> {
    let mut steps = Vec::new();

    if !host_only {
        for (label, args) in CROSS_CHECKS {
            steps.push(Step::required(label, args));
        }
        steps.push(Step::required(
            "panel (hardware, no_std)",
            &[
                "check",
                "-p",
                "panel",
                "--target",
                TARGET,
                "--no-default-features",
                "--features",
                "hardware,defmt",
            ],
        ));
    }

    steps.push(Step::required(
        "panel (simulator, host)",
        &[
            "check",
            "-p",
            "panel",
            "--no-default-features",
            "--features",
            "simulator,std,tracing",
        ],
    ));
    steps.push(Step::advisory(
        "clippy",
        &["clippy", "--workspace", "--all-targets", "--", "-D", "warnings"],
    ));
    steps.push(Step::advisory("rustfmt", &["fmt", "--all", "--check"]));

    run_all("🔍 Checking builds...", &steps)
}
