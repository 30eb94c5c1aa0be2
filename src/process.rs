use std::path::Path;

use chromiumoxide::Page;
use chrono::Local;

use crate::browser::{goto, Session};
use crate::categories::CATEGORIES;
use crate::detail::extract_detail;
use crate::listing::extract_listing;
use crate::records::{CreatorDetail, CreatorStub};
use crate::{info_time, report, store, Result, DETAIL_NAMESPACE, REPORT_PATH, STUB_NAMESPACE};

/// Runs the whole pipeline: list every category, enrich every creator,
/// write the report. The browser session is acquired once here and released
/// on every exit path; an `Err` out of this function is the fatal case.
pub async fn process_directory() -> Result<()> {
    let session = Session::launch().await?;
    let outcome = run_stages(&session).await;
    let released = session.shutdown().await;

    outcome.and(released)
}

async fn run_stages(session: &Session) -> Result<()> {
    let base = Path::new(".");

    list_categories(session, base).await?;
    enrich_creators(session, base).await?;
    write_report(base).await
}

/// Listing stage: one page handle for the stage, one navigation per
/// category, stubs persisted immediately per category. A category whose
/// listing can't be fetched degrades to an empty partition.
async fn list_categories(session: &Session, base: &Path) -> Result<()> {
    let start_time = Local::now();
    info_time!("Started LISTING stage");

    let page = session.new_page().await?;
    for category in CATEGORIES {
        let stubs = match list_one_category(&page, &category.listing_url()).await {
            Ok(stubs) => stubs,
            Err(err) => {
                info_time!("Listing FAILED for category {}: {err}", category.label);
                Vec::new()
            }
        };
        info_time!("Category {}: {} creators listed", category.label, stubs.len());
        store::save(base, STUB_NAMESPACE, category.label, &stubs).await?;
    }
    page.close().await?;

    info_time!(start_time, "Finished LISTING stage");
    Ok(())
}

async fn list_one_category(page: &Page, url: &str) -> Result<Vec<CreatorStub>> {
    goto(page, url).await?;
    extract_listing(page).await
}

/// Enrichment stage: loads every stub partition (missing namespace aborts
/// the run), then visits each creator on a page handle fresh for this
/// stage. A creator whose page fails is logged and dropped; the rest of its
/// partition is unaffected.
async fn enrich_creators(session: &Session, base: &Path) -> Result<()> {
    let start_time = Local::now();
    info_time!("Started ENRICHMENT stage");

    let stub_partitions: Vec<(String, Vec<CreatorStub>)> =
        store::load_all(base, STUB_NAMESPACE).await?;

    let page = session.new_page().await?;
    for (slug, stubs) in &stub_partitions {
        let mut details = Vec::with_capacity(stubs.len());
        for stub in stubs {
            match enrich_one(&page, stub).await {
                Ok(detail) => details.push(detail),
                Err(err) => {
                    info_time!("SKIPPING {} ({}): {err}", stub.name, stub.url);
                }
            }
        }
        info_time!("Category {slug}: {}/{} creators enriched", details.len(), stubs.len());
        store::save(base, DETAIL_NAMESPACE, slug, &details).await?;
    }
    page.close().await?;

    info_time!(start_time, "Finished ENRICHMENT stage");
    Ok(())
}

async fn enrich_one(page: &Page, stub: &CreatorStub) -> Result<CreatorDetail> {
    goto(page, &stub.url).await?;
    extract_detail(page, stub).await
}

/// Reporting stage: re-reads the detail partitions and overwrites the
/// report file.
async fn write_report(base: &Path) -> Result<()> {
    let start_time = Local::now();

    let detail_partitions: Vec<(String, Vec<CreatorDetail>)> =
        store::load_all(base, DETAIL_NAMESPACE).await?;
    let text = report::render(&detail_partitions);
    tokio::fs::write(base.join(REPORT_PATH), text).await?;

    info_time!(start_time, "Wrote the report to file: {REPORT_PATH}");
    Ok(())
}
