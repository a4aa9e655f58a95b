use std::io::{self, Read, Write};
use std::path::Path;

use crate::app::AppContext;
use crate::cli::RunArgs;
use crate::errors::CliError;
use crate::output::{outcome_json, outcome_text};
use crate::script::{parse_script, ScriptRunner};

pub fn handle_run(ctx: &AppContext, args: &RunArgs) -> anyhow::Result<()> {
    let text = read_script(args.script.as_deref())?;
    let lines = parse_script(&text)?;

    let library = ctx.open_library(args)?;
    tracing::info!(
        engine = %library.config().library.engine,
        steps = lines.len(),
        "Running script"
    );
    let mut runner = ScriptRunner::new(library);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for line in &lines {
        let outcome = runner.execute(line)?;
        if args.json {
            writeln!(out, "{}", outcome_json(&outcome))?;
        } else if !(ctx.quiet() && outcome.is_acknowledgement()) {
            writeln!(out, "{}", outcome_text(&outcome))?;
        }
    }
    out.flush()?;

    tracing::info!(copies = runner.library().len(), "Script finished");
    Ok(())
}

/// Read the script from a file, or from stdin for `None` and `-`.
fn read_script(source: Option<&str>) -> anyhow::Result<String> {
    match source {
        None | Some("-") => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .map_err(|e| anyhow::anyhow!("Failed to read script from stdin: {}", e))?;
            Ok(text)
        }
        Some(path) => {
            let path = Path::new(path);
            if !path.exists() {
                return Err(CliError::not_found(
                    format!("No script found at {}", path.display()),
                    "Hint: pass a script path, or `-` to read from stdin.",
                )
                .into());
            }
            std::fs::read_to_string(path)
                .map_err(|e| anyhow::anyhow!("Failed to read script {}: {}", path.display(), e))
        }
    }
}
