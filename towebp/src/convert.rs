use crate::{
	ConvertOptions,
	discovery::find_images,
	job::ConversionJob,
	report::{ConversionSummary, Reporter},
};
use anyhow::{Context, Result};
use std::{collections::HashSet, io::Write, path::Path};

/// Converts every JPG/PNG file directly inside `dir`, one after another.
///
/// Per-file failures are reported and counted but never stop the run. An `Err` is only returned
/// when the directory cannot be listed or the report cannot be written.
pub fn convert_directory<O: Write, E: Write>(
	dir: &Path,
	options: &ConvertOptions,
	reporter: &mut Reporter<O, E>,
) -> Result<ConversionSummary> {
	let files = find_images(dir)?;
	if files.is_empty() {
		reporter.no_files(dir).context("writing report")?;
		return Ok(ConversionSummary::default());
	}

	reporter.found(files.len(), dir).context("writing report")?;
	log::info!(
		"converting {} file(s) with quality {} ({:?} alpha)",
		files.len(),
		options.quality,
		options.alpha_policy
	);

	let mut summary = ConversionSummary::new(files.len());
	let mut outputs = HashSet::new();
	for input in files {
		let job = ConversionJob::new(input, *options);
		if !outputs.insert(job.output.clone()) {
			log::warn!("{:?} is written by more than one input, {:?} wins", job.output, job.input);
		}

		let outcome = job.run();
		reporter.outcome(&job, &outcome).context("writing report")?;
		summary.record(&outcome);
	}

	reporter.summary(&summary).context("writing report")?;
	Ok(summary)
}
