//! Folder to suite mapping and host derivation.

use postman2go_domain::{
    BodyLiteral, HostMode, HttpMethod, PostmanCollection, PostmanItem, TestCase, TestSuite,
};
use tracing::{debug, warn};

/// Suites built from a collection, plus what was left out.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SuitePlan {
    /// One suite per top-level item, in document order.
    pub suites: Vec<TestSuite>,
    /// Names of top-level requests that sit outside any folder. Each still
    /// gets a suite, but with no cases.
    pub skipped: Vec<String>,
}

impl SuitePlan {
    /// Total number of test cases across all suites.
    #[must_use]
    pub fn case_count(&self) -> usize {
        self.suites.iter().map(TestSuite::len).sum()
    }
}

/// Host shared by every generated URL.
///
/// Taken from the first request inside the first top-level item (nested
/// folders depth first). Later items are never consulted: the host is empty
/// when that first item is a bare request, an empty folder, or its request
/// has no host segments.
#[must_use]
pub fn derive_host(collection: &PostmanCollection, mode: HostMode) -> String {
    collection
        .top_level()
        .next()
        .filter(|item| item.is_folder())
        .and_then(|folder| {
            folder
                .requests()
                .into_iter()
                .find_map(|item| item.request.as_ref())
        })
        .map(|request| mode.derive(request.url.host()))
        .unwrap_or_default()
}

/// Builds one suite per top-level item.
///
/// Requests in nested folders are flattened into their top-level folder's
/// suite. A top-level item that is a plain request yields an empty suite and
/// is reported in [`SuitePlan::skipped`].
#[must_use]
pub fn build_suites(collection: &PostmanCollection) -> SuitePlan {
    let mut plan = SuitePlan::default();

    for item in collection.top_level() {
        let mut suite = TestSuite::new(&item.name);
        if item.is_folder() {
            for request_item in item.requests() {
                if let Some(case) = test_case(request_item) {
                    suite.add(case);
                }
            }
        } else {
            warn!(
                request = %item.name,
                "request outside of any folder gets an empty test function"
            );
            plan.skipped.push(item.name.clone());
        }
        debug!(
            folder = %suite.folder_name,
            function = %suite.function_name,
            cases = suite.len(),
            "built test suite"
        );
        plan.suites.push(suite);
    }

    plan
}

fn test_case(item: &PostmanItem) -> Option<TestCase> {
    let request = item.request.as_ref()?;
    let method = HttpMethod::from(request.method.as_str());
    if !method.is_standard() {
        warn!(
            request = %item.name,
            method = %method,
            "non-standard method; the generated constant may not exist in net/http"
        );
    }
    Some(TestCase::new(
        &item.name,
        request.url.path(),
        method,
        BodyLiteral::from_raw(request.raw_body()),
    ))
}
