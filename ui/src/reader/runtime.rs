//! Executes [`ReaderCommand`]s and turns their results into [`ReaderMsg`]s.

use api::QuranSource;
use dioxus::logger::tracing::warn;

use crate::core::{share, timing};

use super::engine::{ReaderCommand, ReaderMsg};

/// Title handed to the share sheet alongside the link.
const SHARE_TITLE: &str = "Quran";

/// Run one command to completion. Failures come back as messages, never as panics.
pub async fn execute<S: QuranSource>(
    source: &S,
    command: ReaderCommand,
    origin: &str,
) -> ReaderMsg {
    match command {
        ReaderCommand::FetchVerse {
            token,
            position,
            edition,
        } => {
            let outcome = source.fetch_verse(position, edition).await;
            if let Err(err) = &outcome {
                warn!(%position, edition = edition.id(), %err, "verse fetch failed");
            }
            ReaderMsg::VerseFetched { token, outcome }
        }
        ReaderCommand::Search {
            token,
            query,
            edition,
        } => {
            let outcome = source.search(&query, edition).await;
            if let Err(err) = &outcome {
                warn!(%query, %err, "search failed");
            }
            ReaderMsg::SearchFinished { token, outcome }
        }
        ReaderCommand::Share(link) => {
            let outcome = match link.to_url(origin) {
                Ok(url) => share::deliver(url.to_string(), SHARE_TITLE.to_string()).await,
                Err(err) => Err(err),
            };
            ReaderMsg::ShareFinished(outcome)
        }
        ReaderCommand::ExpireToast { id, after_ms } => {
            timing::sleep_ms(after_ms).await;
            ReaderMsg::DismissToast(id)
        }
    }
}
