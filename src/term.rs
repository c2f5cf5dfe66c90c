//! Terminal rendering
//!
//! Plain-text renditions of the view states for the `blogdeck` binary.

use std::fmt::Write;

use crate::model::Upload;
use crate::route::{FORM_PATH, LIST_PATH};
use crate::view::detail::{NO_COVER_MESSAGE, NOT_FOUND_MESSAGE};
use crate::view::list::{CONFIRM_BODY, CONFIRM_TITLE, EMPTY_MESSAGE};
use crate::view::{
    ConfirmDialog, DetailState, DetailView, FormView, ListDisplay, ListView, NavBar, Notice,
    NoticeKind, PostCard,
};

const RULE: &str = "----------------------------------------";

pub fn render_notice(notice: &Notice) -> String {
    match notice.kind {
        NoticeKind::Success => format!("[ok] {}", notice.text),
        NoticeKind::Error => format!("[error] {}", notice.text),
    }
}

pub fn render_nav(nav: &NavBar) -> String {
    nav.links()
        .iter()
        .map(|link| format!("{} ({})", link.label, link.href))
        .collect::<Vec<_>>()
        .join(" | ")
}

fn render_card(out: &mut String, card: &PostCard) {
    let _ = writeln!(out, "#{} {}", card.id, card.title);
    if let Some(published) = &card.published {
        let _ = writeln!(out, "  {}", published);
    }
    if let Some(cover) = &card.cover_image {
        let _ = writeln!(out, "  cover: {}", cover);
    }
    let _ = writeln!(out, "  {}", card.message);
    let _ = writeln!(
        out,
        "  read: {}  edit: {}",
        card.detail.href(),
        card.edit.href()
    );
}

pub fn render_list(view: &ListView) -> String {
    let mut out = String::new();
    if let Some(banner) = view.banner() {
        let _ = writeln!(out, "{}", render_notice(banner));
    }

    match view.display() {
        ListDisplay::Loading => out.push_str("Loading...\n"),
        ListDisplay::Empty => {
            let _ = writeln!(out, "{}", EMPTY_MESSAGE);
        }
        ListDisplay::Posts { featured, grid } => {
            let _ = writeln!(out, "Featured");
            let _ = writeln!(out, "{}", RULE);
            render_card(&mut out, &PostCard::from_post(featured));
            let _ = writeln!(out);
            let _ = writeln!(out, "All Blogs ({})", grid.len());
            let _ = writeln!(out, "{}", RULE);
            for post in grid {
                render_card(&mut out, &PostCard::from_post(post));
            }
        }
    }
    let _ = writeln!(out, "Add New Blog ({})", FORM_PATH);
    out
}

pub fn render_confirm(dialog: &ConfirmDialog) -> String {
    format!("{} (blog #{})\n{}", CONFIRM_TITLE, dialog.target, CONFIRM_BODY)
}

pub fn render_detail(view: &DetailView) -> String {
    let mut out = String::new();
    match view.state() {
        DetailState::Idle | DetailState::Loading => out.push_str("Loading...\n"),
        DetailState::NotFound => {
            let _ = writeln!(out, "{}", NOT_FOUND_MESSAGE);
        }
        DetailState::Failed(message) => {
            let _ = writeln!(out, "{}", render_notice(&Notice::error(message.clone())));
        }
        DetailState::Loaded(post) => {
            let _ = writeln!(out, "{}", post.title);
            if let Some(published) = post.publish_line() {
                let _ = writeln!(out, "{}", published);
            }
            let _ = writeln!(out, "{}", RULE);
            match &post.cover_image {
                Some(cover) => {
                    let _ = writeln!(out, "cover: {}", cover);
                }
                None => {
                    let _ = writeln!(out, "{}", NO_COVER_MESSAGE);
                }
            }
            let _ = writeln!(out);
            let _ = writeln!(out, "{}", post.message);
        }
    }
    let _ = writeln!(out, "Go Back ({})", LIST_PATH);
    out
}

pub fn render_form<U: Upload>(view: &FormView<U>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", view.heading());
    let _ = writeln!(out, "{}", RULE);

    if view.is_loading() {
        out.push_str("Loading...\n");
        return out;
    }
    if let Some(banner) = view.banner() {
        let _ = writeln!(out, "{}", render_notice(banner));
    }

    let draft = view.draft();
    let errors = view.field_errors();
    let _ = writeln!(out, "Title: {}", draft.title);
    if let Some(error) = errors.title {
        let _ = writeln!(out, "  ! {}", error);
    }
    let _ = writeln!(out, "Message: {}", draft.message);
    if let Some(error) = errors.message {
        let _ = writeln!(out, "  ! {}", error);
    }
    if let Some(file) = view.selected_file_name() {
        let _ = writeln!(out, "Cover file: {}", file);
    }
    if let Some(preview) = view.preview() {
        let _ = writeln!(out, "Cover: {}", preview.url());
    }
    let _ = writeln!(out, "[{}]", view.submit_label());
    let _ = writeln!(out, "View Blogs ({})", LIST_PATH);
    out
}

pub fn render_not_found(path: &str) -> String {
    format!("404: nothing lives at {}\n{}", path, render_nav(&NavBar::default()))
}
