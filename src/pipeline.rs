//! Per-file processing pipeline and the parallel batch driver.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result, anyhow};
use tracing::debug;

use crate::convert::Converter;
use crate::render::{front_matter, includes, macros, title};

/// Immutable per-run state shared by every file job.
///
/// The version token and date are computed once at startup and passed in
/// here; jobs only ever read them.
#[derive(Debug)]
pub struct RunContext {
    /// Short commit id embedded in every title block.
    pub version: String,
    /// Run date, formatted for the title block.
    pub date: String,
    /// Project label placed after the version token.
    pub label: String,
    /// Directory the rendered pages are written into (already created).
    pub out_dir: PathBuf,
    /// External converter handle.
    pub converter: Converter,
}

/// Result of one file's trip through the pipeline.
#[derive(Debug)]
pub struct FileOutcome {
    /// The input file this outcome belongs to.
    pub input: PathBuf,
    /// The written output path, or what went wrong.
    pub result: Result<PathBuf>,
}

/// Run one file through the pipeline: read, strip front matter, resolve
/// includes, prepend the title block, rewrite macros, convert, write.
///
/// Returns the path of the written output file, named after the input with
/// its `.md` extension removed.
///
/// # Errors
///
/// Returns an error if the input cannot be read, an include fails to
/// resolve, the converter fails, or the output cannot be written.
pub fn process_file(ctx: &RunContext, input: &Path) -> Result<PathBuf> {
    debug!("processing file: {}", input.display());

    let raw = std::fs::read_to_string(input)
        .with_context(|| format!("failed to read {}", input.display()))?;
    let body = front_matter::strip(&raw);
    let resolved = includes::resolve(body, input)?;

    let base = input
        .file_name()
        .and_then(std::ffi::OsStr::to_str)
        .ok_or_else(|| anyhow!("input file name is not valid UTF-8: {}", input.display()))?;

    let mut doc = title::title_block(base, &ctx.version, &ctx.date, &ctx.label);
    doc.push_str(&resolved);
    let doc = macros::rewrite(&doc);

    let rendered = ctx.converter.convert(&doc)?;

    let out_path = ctx.out_dir.join(base.strip_suffix(".md").unwrap_or(base));
    std::fs::write(&out_path, rendered)
        .with_context(|| format!("failed to write {}", out_path.display()))?;
    debug!("man file written: {}", out_path.display());
    Ok(out_path)
}

/// Run every file through the pipeline and join all jobs.
///
/// Files are submitted in slice order; with `parallel` set the jobs run on
/// the Rayon pool and complete in unspecified order. Every file yields a
/// [`FileOutcome`], so a failing file never hides the outcome of the
/// others, and the returned vector preserves the input order.
#[must_use]
pub fn run_all(ctx: &RunContext, files: &[PathBuf], parallel: bool) -> Vec<FileOutcome> {
    let job = |input: &PathBuf| FileOutcome {
        input: input.clone(),
        result: process_file(ctx, input),
    };

    if parallel {
        use rayon::prelude::*;
        files.par_iter().map(job).collect()
    } else {
        files.iter().map(job).collect()
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::exec::test_helpers::MockExecutor;

    fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, content).unwrap();
        path
    }

    fn context(out_dir: PathBuf, executor: Arc<MockExecutor>) -> RunContext {
        RunContext {
            version: "abc1234".to_string(),
            date: "2025/11/30".to_string(),
            label: "Dovecot".to_string(),
            out_dir,
            converter: Converter::new("pandoc", &[], executor),
        }
    }

    #[test]
    fn end_to_end_document_assembly() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out");
        std::fs::create_dir_all(&out).unwrap();
        let input = write(
            dir.path(),
            "doveadm.1.md",
            "---\ntitle: x\n---\n[[man,doveadm-sync,,8]]\n",
        );

        let executor = Arc::new(MockExecutor::ok(".TH page\n"));
        let ctx = context(out.clone(), Arc::clone(&executor));

        let written = process_file(&ctx, &input).unwrap();
        assert_eq!(written, out.join("doveadm.1"));
        assert_eq!(std::fs::read_to_string(&written).unwrap(), ".TH page\n");

        // The converter received the assembled document: title block first,
        // front matter gone, macro rewritten.
        let sent = &executor.calls()[0].2;
        assert!(
            sent.starts_with("% doveadm(1) abc1234 | Dovecot\n%\n% 2025/11/30\n\n"),
            "unexpected document prefix: {sent}"
        );
        assert!(sent.contains("doveadm-sync(8)"));
        assert!(!sent.contains("title: x"));
        assert!(!sent.contains("[[man"));
    }

    #[test]
    fn includes_are_resolved_before_conversion() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out");
        std::fs::create_dir_all(&out).unwrap();
        write(dir.path(), "man/include/opts.md", "OPTIONS\n");
        let input = write(dir.path(), "man/tool.1.md", "<!-- @include: include/opts.md -->");

        let executor = Arc::new(MockExecutor::ok("rendered"));
        let ctx = context(out, Arc::clone(&executor));

        process_file(&ctx, &input).unwrap();
        let sent = &executor.calls()[0].2;
        assert!(sent.contains("OPTIONS\n"));
        assert!(!sent.contains("@include"));
    }

    #[test]
    fn converter_failure_fails_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out");
        std::fs::create_dir_all(&out).unwrap();
        let input = write(dir.path(), "tool.1.md", "body\n");

        let ctx = context(out.clone(), Arc::new(MockExecutor::fail("boom")));
        let err = process_file(&ctx, &input).unwrap_err();
        assert!(err.to_string().contains("pandoc"), "got: {err:#}");
        assert!(
            !out.join("tool.1").exists(),
            "no output should be written for a failed conversion"
        );
    }

    #[test]
    fn missing_input_fails_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = context(dir.path().to_path_buf(), Arc::new(MockExecutor::ok("")));
        let err = process_file(&ctx, &dir.path().join("absent.1.md")).unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }

    #[test]
    fn non_md_input_keeps_its_full_name() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out");
        std::fs::create_dir_all(&out).unwrap();
        let input = write(dir.path(), "tool.1.markdown", "body\n");

        let ctx = context(out.clone(), Arc::new(MockExecutor::ok("x")));
        let written = process_file(&ctx, &input).unwrap();
        assert_eq!(written, out.join("tool.1.markdown"), "only .md is stripped");
    }

    #[test]
    fn run_all_preserves_input_order_and_isolates_failures() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out");
        std::fs::create_dir_all(&out).unwrap();
        let good = write(dir.path(), "good.1.md", "fine\n");
        let bad = write(dir.path(), "bad.1.md", "<!-- @include: missing.md -->");

        let executor = Arc::new(MockExecutor::with_responses(vec![
            (true, "page".to_string(), String::new()),
            (true, "page".to_string(), String::new()),
        ]));
        let ctx = context(out, executor);

        let files = vec![good.clone(), bad.clone()];
        let outcomes = run_all(&ctx, &files, false);
        assert_eq!(outcomes.len(), 2);
        assert_eq!(outcomes[0].input, good);
        assert!(outcomes[0].result.is_ok());
        assert_eq!(outcomes[1].input, bad);
        assert!(outcomes[1].result.is_err(), "bad include fails only its file");
    }

    #[test]
    fn run_all_parallel_processes_every_file() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out");
        std::fs::create_dir_all(&out).unwrap();

        let files: Vec<PathBuf> = (0..8)
            .map(|i| write(dir.path(), &format!("tool{i}.1.md"), "body\n"))
            .collect();

        let responses = (0..8)
            .map(|_| (true, "page".to_string(), String::new()))
            .collect();
        let ctx = context(out.clone(), Arc::new(MockExecutor::with_responses(responses)));

        let outcomes = run_all(&ctx, &files, true);
        assert_eq!(outcomes.len(), 8);
        assert!(outcomes.iter().all(|o| o.result.is_ok()));
        for i in 0..8 {
            assert!(out.join(format!("tool{i}.1")).exists());
        }
    }
}
