use super::DependencyContext;
use crate::diagnostics::Report;
use crate::models::JavaDependency;

pub(super) fn check_java(dep: &JavaDependency, ctx: &DependencyContext<'_>, report: &mut Report) {
    let coordinate = dep.coordinate();

    if let Err(err) = ctx.fetcher.require(&coordinate, None) {
        report.error(format!("could not fetch java jar: {err}"));
    }
    if let Err(err) = ctx.fetcher.require(&coordinate, Some("sources")) {
        report.warn(format!("could not fetch java sources: {err}"));
    }
    if let Err(err) = ctx.fetcher.require(&coordinate, Some("javadoc")) {
        report.warn(format!("could not fetch java docs: {err}"));
    }
}
