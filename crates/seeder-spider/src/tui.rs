use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Progress over the quarters being scanned; hidden unless running in tui mode.
pub(crate) fn quarter_progress(len: usize, tui: bool) -> anyhow::Result<ProgressBar> {
    if !tui {
        return Ok(ProgressBar::hidden());
    }

    let pb = ProgressBar::new(len as u64).with_style(
        ProgressStyle::default_bar()
            .template(
                "{msg} {spinner:.magenta}\n\
                [{elapsed_precise:.magenta}] |{bar:40.cyan/blue}| {pos}/{len} quarters \
                [ETA: {eta:.blue}]",
            )?
            .progress_chars("##-"),
    );
    pb.set_message("preparing ...");
    pb.enable_steady_tick(Duration::from_millis(100));

    Ok(pb)
}
