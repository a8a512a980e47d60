use crate::application::dto::{CertifyRequest, CertifyResponse};
use crate::certification::domain::{
    CheckStatus, DatasetAggregate, DatasetFingerprint, RiskCheckResult, ScannedFile, ScoredFile,
};
use crate::certification::services::{
    CertificateIssuer, DatasetAggregator, FileFilter, FileScorer, Fingerprinter,
};
use crate::ports::outbound::{
    FileSource, ProgressReporter, RiskCheckProvider, ScanFailure, ScanOutcome,
};
use crate::shared::Result;
use futures::stream::{self, StreamExt};

/// Per-file outcome of the risk-check stage, tagged with the file's index
type IndexedCheck = (usize, RiskCheckResult, CheckStatus);

/// CertifyDatasetUseCase - Core use case for dataset certification
///
/// Orchestrates scan, fingerprint, risk checks, scoring and aggregation
/// using generic dependency injection for all infrastructure dependencies.
///
/// # Type Parameters
/// * `FS` - FileSource implementation
/// * `RCP` - RiskCheckProvider implementation
/// * `PR` - ProgressReporter implementation
pub struct CertifyDatasetUseCase<FS, RCP, PR> {
    file_source: FS,
    risk_check_provider: RCP,
    progress_reporter: PR,
}

impl<FS, RCP, PR> CertifyDatasetUseCase<FS, RCP, PR>
where
    FS: FileSource,
    RCP: RiskCheckProvider,
    PR: ProgressReporter,
{
    /// Creates a new CertifyDatasetUseCase with injected dependencies
    pub fn new(file_source: FS, risk_check_provider: RCP, progress_reporter: PR) -> Self {
        Self {
            file_source,
            risk_check_provider,
            progress_reporter,
        }
    }

    /// Executes the certification use case
    ///
    /// # Arguments
    /// * `request` - Dataset folder plus exclusion, concurrency and threshold options
    ///
    /// # Returns
    /// CertifyResponse with certificate metadata, fingerprint and aggregate
    ///
    /// # Errors
    /// Returns an error if the exclusion patterns are invalid or the dataset
    /// folder cannot be scanned. Failures of individual files never abort
    /// the run.
    pub async fn execute(&self, request: CertifyRequest) -> Result<CertifyResponse> {
        // Step 1: Compile exclusion patterns
        let filter = FileFilter::new(request.exclude_patterns.clone())?;

        // Step 2: Enumerate and fingerprint files
        let outcome = self.scan_dataset(&request, &filter)?;
        let unmatched_patterns = self.warn_unmatched_patterns(&filter);
        let ScanOutcome { files, failures } = outcome;

        // Step 3: Dataset-level digests
        let fingerprint = self.fingerprint_dataset(&files);

        // Step 4: Risk checks and per-file scoring
        let scored_files = self.check_and_score(files, &request).await;

        // Step 5: Aggregate into the dataset assessment
        let aggregate = DatasetAggregator::aggregate(scored_files);
        self.report_assessment(&aggregate);

        // Step 6: Build and return response
        Ok(self.build_response(fingerprint, aggregate, failures, unmatched_patterns, &request))
    }

    /// Scans the dataset folder, reporting progress and per-file failures
    fn scan_dataset(&self, request: &CertifyRequest, filter: &FileFilter) -> Result<ScanOutcome> {
        self.progress_reporter.report(&format!(
            "📂 Scanning dataset folder: {}",
            request.dataset_path.display()
        ));

        let outcome = self.file_source.scan(&request.dataset_path, filter)?;
        tracing::debug!(
            files = outcome.files.len(),
            failures = outcome.failures.len(),
            "scan finished"
        );

        for failure in &outcome.failures {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: Skipped '{}': {}",
                failure.path, failure.reason
            ));
        }

        if outcome.files.is_empty() {
            self.progress_reporter.report_error(
                "⚠️  Warning: No files to certify. The certificate will carry score 0 (CRITICAL).",
            );
        } else {
            self.progress_reporter
                .report(&format!("✅ Fingerprinted {} file(s)", outcome.files.len()));
        }

        Ok(outcome)
    }

    /// Warns about exclusion patterns that did not match any file
    fn warn_unmatched_patterns(&self, filter: &FileFilter) -> Vec<String> {
        let unmatched = filter.get_unmatched_patterns();
        for pattern in &unmatched {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: Exclude pattern '{}' did not match any files.",
                pattern
            ));
        }
        unmatched
    }

    fn fingerprint_dataset(&self, files: &[ScannedFile]) -> DatasetFingerprint {
        let fingerprint = Fingerprinter::fingerprint(files);
        self.progress_reporter.report(&format!(
            "🔏 Dataset hash: {}",
            fingerprint.dataset_hash()
        ));
        fingerprint
    }

    /// Runs the risk checks for every file and scores the results
    ///
    /// Returned files keep the scan order.
    async fn check_and_score(
        &self,
        files: Vec<ScannedFile>,
        request: &CertifyRequest,
    ) -> Vec<ScoredFile> {
        if files.is_empty() {
            return Vec::new();
        }

        self.progress_reporter.report(&format!(
            "🔍 Running risk checks ({} at a time)...",
            request.max_concurrent_checks
        ));

        let checks = self.run_checks(&files, request).await;

        let degraded_files: Vec<(&str, &str)> = files
            .iter()
            .zip(&checks)
            .filter_map(|(file, (_, _, status))| status.reason().map(|r| (file.path(), r)))
            .collect();
        for (path, reason) in &degraded_files {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: Risk checks failed for '{}': {}. Scored with a degraded result.",
                path, reason
            ));
        }
        let degraded_count = degraded_files.len();

        self.progress_reporter.report_completion(&format!(
            "✅ Risk checks complete: {} succeeded out of {}, {} degraded",
            files.len() - degraded_count,
            files.len(),
            degraded_count
        ));

        files
            .into_iter()
            .zip(checks)
            .map(|(file, (_, result, status))| FileScorer::score_file(file, result, status))
            .collect()
    }

    /// Bounded-concurrency risk checks, each under its own timeout
    ///
    /// Results arrive in completion order, are reported as progress, then
    /// re-sorted by file index.
    async fn run_checks(
        &self,
        files: &[ScannedFile],
        request: &CertifyRequest,
    ) -> Vec<IndexedCheck> {
        let provider = &self.risk_check_provider;
        let check_timeout = request.check_timeout;
        let total = files.len();

        let mut pending = stream::iter(files.iter().enumerate())
            .map(|(idx, file)| async move {
                let outcome = tokio::time::timeout(
                    check_timeout,
                    provider.check(file.mime_type(), file.metadata()),
                )
                .await;

                let (result, status) = match outcome {
                    Ok(Ok(result)) => (result, CheckStatus::Completed),
                    Ok(Err(e)) => {
                        tracing::warn!(file = file.path(), error = %e, "risk check failed");
                        degraded(e.to_string())
                    }
                    Err(_) => {
                        tracing::warn!(file = file.path(), ?check_timeout, "risk check timed out");
                        degraded(format!("timed out after {:?}", check_timeout))
                    }
                };
                (idx, result, status)
            })
            .buffer_unordered(request.max_concurrent_checks.max(1));

        let mut checks: Vec<IndexedCheck> = Vec::with_capacity(total);
        while let Some(check) = pending.next().await {
            checks.push(check);
            self.progress_reporter
                .report_progress(checks.len(), total, Some("Checking files..."));
        }

        checks.sort_by_key(|(idx, _, _)| *idx);
        checks
    }

    fn report_assessment(&self, aggregate: &DatasetAggregate) {
        self.progress_reporter.report(&format!(
            "📊 Dataset score: {} ({}), {} high-risk file(s)",
            aggregate.score, aggregate.risk_band, aggregate.high_risk_files
        ));
    }

    /// Builds the final response, stamping a fresh certificate
    fn build_response(
        &self,
        fingerprint: DatasetFingerprint,
        aggregate: DatasetAggregate,
        scan_failures: Vec<ScanFailure>,
        unmatched_patterns: Vec<String>,
        request: &CertifyRequest,
    ) -> CertifyResponse {
        let metadata = CertificateIssuer::issue_default();

        let threshold_exceeded = request
            .fail_on
            .map(|threshold| aggregate.risk_band.meets_or_exceeds(threshold))
            .unwrap_or(false);

        CertifyResponse::new(
            metadata,
            fingerprint,
            aggregate,
            scan_failures,
            unmatched_patterns,
            threshold_exceeded,
        )
    }
}

fn degraded(reason: String) -> (RiskCheckResult, CheckStatus) {
    (
        RiskCheckResult::degraded(),
        CheckStatus::Degraded { reason },
    )
}
