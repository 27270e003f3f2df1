use anyhow::{bail, Result};
use clap::CommandFactory;
use notebook_runner::{Cli, CellRunner, Notebook, PythonEvaluator};

fn main() -> Result<()> {
    // Bare invocation gets the usage text, not an error
    if std::env::args().len() <= 1 {
        Cli::command().print_help()?;
        return Ok(());
    }

    let args = Cli::parse();

    let Some(notebook_path) = args.nb.as_deref() else {
        bail!("no notebook given, use --nb <PATH>");
    };
    if !notebook_path.exists() {
        bail!("notebook file does not exist: {}", notebook_path.display());
    }
    let Some(mode) = args.run_mode() else {
        bail!("specify one of the options --all, --cell, --until, or --from");
    };

    let notebook = Notebook::load(notebook_path)?;
    let selection = mode.resolve(notebook.cell_count());

    let mut runner = CellRunner::new(PythonEvaluator::new()?);
    runner.run(&notebook, selection.as_ref());

    Ok(())
}
