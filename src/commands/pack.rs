use crate::cli::Cli;
use crate::services::converter::{pack_directory, PackOptions};
use crate::services::output::print_one;

pub fn handle_pack(cli: &Cli) -> anyhow::Result<()> {
    let opts = PackOptions {
        sort: cli.sort,
        deny_collisions: cli.deny_collisions,
    };
    let report = pack_directory(&cli.directory, &cli.output_file, opts)?;
    log::info!(
        "packed {} files into {} ({} entries skipped)",
        report.files.len(),
        report.output,
        report.skipped
    );

    let output_file = cli.output_file.display().to_string();
    print_one(cli.json, report, |_| {
        format!("Byte arrays have been written to {}", output_file)
    })
}
