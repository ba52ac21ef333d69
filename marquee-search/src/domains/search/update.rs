//! Search domain update logic
//!
//! Every state transition happens here, synchronously. Network work is
//! handed back as a [`Task`] whose result re-enters as
//! [`Message::PageLoaded`] or [`Message::DetailLoaded`]. Page responses
//! carry the generation they were issued under and are ignored once a newer
//! query (or a selection) has bumped it; detail responses do the same with
//! `detail_ticket`.

use std::sync::Arc;

use marquee_model::{ItemDetail, ItemSuggestion};

use super::SearchDomain;
use super::error::SearchError;
use super::messages::Message;
use super::scroll::ScrollViewport;
use super::types::{FetchTicket, InputSelection, SuggestionPage};
use crate::infra::Task;

pub fn update(domain: &mut SearchDomain, message: Message) -> Task<Message> {
    log::trace!("[Search] {}", message.as_str());

    match message {
        Message::QueryChanged(text) => handle_query_changed(domain, text),

        Message::InputFocused => {
            if domain.state.query.trim().is_empty() {
                let text = domain.state.query.clone();
                handle_query_changed(domain, text)
            } else {
                Task::none()
            }
        }

        Message::LoadMore => handle_load_more(domain),

        Message::ListScrolled(viewport) => handle_scrolled(domain, viewport),

        Message::Select(InputSelection::FreeText(text)) => {
            handle_query_changed(domain, text)
        }

        Message::Select(InputSelection::Suggestion(suggestion)) => {
            handle_select_suggestion(domain, suggestion)
        }

        Message::DismissSelection => {
            let state = &mut domain.state;
            state.selection = None;
            if state.loading_detail.take().is_some() {
                // Drop the lookup that is still on its way.
                state.detail_ticket += 1;
            }
            Task::none()
        }

        Message::PageLoaded { ticket, result } => {
            handle_page_loaded(domain, ticket, result);
            Task::none()
        }

        Message::DetailLoaded {
            ticket,
            suggestion,
            result,
        } => {
            handle_detail_loaded(domain, ticket, suggestion, result);
            Task::none()
        }
    }
}

fn handle_query_changed(domain: &mut SearchDomain, text: String) -> Task<Message> {
    let state = &mut domain.state;
    state.query = text;
    state.error = None;

    if state.query.trim().is_empty() {
        state.cursor.reset_empty(&state.query);
        state.store.replace(state.recent.as_suggestions());
        state.showing_recent = true;
        return Task::none();
    }

    state.showing_recent = false;
    let ticket = state.cursor.reset(&state.query);
    fetch_page(domain, ticket)
}

fn handle_load_more(domain: &mut SearchDomain) -> Task<Message> {
    match domain.state.cursor.begin_next_page() {
        Some(ticket) => fetch_page(domain, ticket),
        None => {
            log::debug!(
                "[Search] load more ignored (has_more={}, fetching={})",
                domain.state.cursor.has_more,
                domain.state.cursor.is_fetching
            );
            Task::none()
        }
    }
}

fn handle_scrolled(
    domain: &mut SearchDomain,
    viewport: ScrollViewport,
) -> Task<Message> {
    if viewport.is_near_end(domain.state.scroll_threshold_px) {
        handle_load_more(domain)
    } else {
        Task::none()
    }
}

fn fetch_page(domain: &SearchDomain, ticket: FetchTicket) -> Task<Message> {
    let service = Arc::clone(&domain.service);
    let text = ticket.text.clone();
    let page = ticket.page;

    Task::perform(
        async move { service.search_page(&text, page).await },
        move |result| Message::PageLoaded { ticket, result },
    )
}

fn handle_page_loaded(
    domain: &mut SearchDomain,
    ticket: FetchTicket,
    result: Result<SuggestionPage, SearchError>,
) {
    let state = &mut domain.state;
    if !state.cursor.accepts(&ticket) {
        log::debug!(
            "[Search] discarding stale page {} for '{}' (generation {} != {})",
            ticket.page,
            ticket.text,
            ticket.generation,
            state.cursor.generation
        );
        return;
    }

    match result {
        Ok(page) => {
            if ticket.page == marquee_model::FIRST_PAGE {
                state.store.replace(page.items);
            } else {
                let added = state.store.append_unique(page.items);
                log::debug!(
                    "[Search] appended {} items from page {}",
                    added,
                    ticket.page
                );
            }
            state.cursor.complete(&ticket, page.last);
            state.showing_recent = false;
            state.error = None;
        }
        Err(err) => {
            log::warn!(
                "[Search] page {} for '{}' failed: {}",
                ticket.page,
                ticket.text,
                err
            );
            state.cursor.fail();
            state.error = Some(err.to_string());
        }
    }
}

fn handle_select_suggestion(
    domain: &mut SearchDomain,
    suggestion: ItemSuggestion,
) -> Task<Message> {
    let state = &mut domain.state;
    state.store.clear();
    state.showing_recent = false;
    state.query = suggestion.name.clone();
    state.cursor.invalidate();
    state.error = None;
    state.detail_ticket += 1;
    state.loading_detail = Some(suggestion.id);

    let ticket = state.detail_ticket;
    let service = Arc::clone(&domain.service);
    let id = suggestion.id;

    Task::perform(
        async move { service.fetch_item(id).await },
        move |result| Message::DetailLoaded {
            ticket,
            suggestion,
            result,
        },
    )
}

fn handle_detail_loaded(
    domain: &mut SearchDomain,
    ticket: u64,
    suggestion: ItemSuggestion,
    result: Result<ItemDetail, SearchError>,
) {
    let state = &mut domain.state;
    if ticket != state.detail_ticket {
        log::debug!(
            "[Search] discarding stale detail for item {}",
            suggestion.id
        );
        return;
    }
    state.loading_detail = None;

    match result {
        Ok(detail) => {
            state.selection = Some(detail);
            state.recent.record_selection(suggestion);
            if let Err(err) = domain.recent_store.save(state.recent.items()) {
                log::warn!("[Search] failed to persist recent items: {}", err);
                state.error =
                    Some(SearchError::Persist(err.to_string()).to_string());
            }
        }
        Err(err) => {
            log::warn!(
                "[Search] detail for item {} failed: {}",
                suggestion.id,
                err
            );
            state.selection = None;
            state.error = Some(err.to_string());
        }
    }
}
