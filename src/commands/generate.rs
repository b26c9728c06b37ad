//! `generate` subcommand: shell completions and man pages for `jp`.
use anyhow::{Context, Result};
use clap_complete::Shell;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Write shell completions for `cmd` to `writer`.
pub fn generate_completions<W: Write>(
    shell: Shell,
    cmd: &mut clap::Command,
    writer: &mut W,
) {
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, cmd, name, writer);
}

/// Generate the man page for `cmd` and one page per subcommand (named
/// `<parent>-<subcommand>.1`) into `output_dir`, defaulting to the current
/// directory. Returns the paths written.
///
/// # Errors
///
/// Returns an error if the output directory or a page cannot be written.
pub fn generate_man_pages(
    cmd: &clap::Command,
    output_dir: Option<PathBuf>,
) -> Result<Vec<PathBuf>> {
    let output_dir = match output_dir {
        Some(dir) => dir,
        None => std::env::current_dir().context("Opening current directory")?,
    };

    std::fs::create_dir_all(&output_dir)
        .context("create output man directories")?;

    let mut written = vec![];
    let main_path = output_dir.join(format!("{}.1", cmd.get_name()));
    render_page(cmd.clone(), &main_path)?;
    written.push(main_path);

    collect_subcommand_pages(cmd, &output_dir, cmd.get_name(), &mut written)?;

    Ok(written)
}

/// Render subcommand pages recursively, appending each path to `written`.
fn collect_subcommand_pages(
    cmd: &clap::Command,
    output_dir: &Path,
    prefix: &str,
    written: &mut Vec<PathBuf>,
) -> Result<()> {
    for subcmd in cmd.get_subcommands() {
        let prefixed_name = format!("{}-{}", prefix, subcmd.get_name());

        // clap_mangen takes the page title from the command name, which
        // must be `'static`
        let leaked_name: &'static str =
            Box::leak(prefixed_name.clone().into_boxed_str());
        let renamed = subcmd
            .clone()
            .name(leaked_name)
            .disable_help_subcommand(true);

        let path = output_dir.join(format!("{prefixed_name}.1"));
        render_page(renamed, &path)?;
        written.push(path);

        if subcmd.has_subcommands() {
            collect_subcommand_pages(subcmd, output_dir, &prefixed_name, written)?;
        }
    }

    Ok(())
}

/// Render a single man page for `cmd` at `path`, truncating any existing file.
fn render_page(cmd: clap::Command, path: &Path) -> Result<()> {
    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .with_context(|| format!("failed to create {}", path.display()))?;

    clap_mangen::Man::new(cmd)
        .render(&mut file)
        .with_context(|| format!("failed to render {}", path.display()))?;
    log::info!("generated {}", path.display());
    Ok(())
}
