//! Markup for the page shell and the todo fragments.
//!
//! Every function here is pure: the same input always renders the same
//! bytes. The htmx attributes emitted are the whole client contract:
//!
//! | attribute | element | client behaviour |
//! |---|---|---|
//! | `hx-get` + `hx-trigger="load"` | `body` | GET `/todos` once on load |
//! | `hx-post` | checkbox, form | POST on change / submit, form fields url-encoded |
//! | `hx-delete` | delete button | DELETE on click |
//! | `hx-target="closest div"` | checkbox, delete button | swap the enclosing todo block |
//! | `hx-swap` | all of the above | `innerHTML`, `outerHTML` or `beforebegin` |
//! | `_` | form | hyperscript, resets the form once submitted |
//!
//! An `outerHTML` swap with an empty response removes the target, which is
//! how delete takes an item off the page.

use maud::{html, Markup, DOCTYPE};

use crate::models::Todo;

pub const HTMX_SRC: &str = "https://unpkg.com/htmx.org@1.9.3";
pub const TAILWIND_SRC: &str = "https://cdn.tailwindcss.com";
pub const HYPERSCRIPT_SRC: &str = "https://unpkg.com/hyperscript.org@0.9.9";

// full document, the body pulls in the todo list once loaded
pub fn shell(content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="description" content="The Beth Stack";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { "THE BETH STACK" }
                script src=(HTMX_SRC) {}
                script src=(TAILWIND_SRC) {}
                script src=(HYPERSCRIPT_SRC) {}
            }
            body class="flex w-full h-screen justify-center items-center"
                hx-get="/todos" hx-trigger="load" hx-swap="innerHTML" {
                (content)
            }
        }
    }
}

// a single todo block, replaced in place when toggled and removed on delete
pub fn todo_item(todo: &Todo) -> Markup {
    html! {
        div class="p-4 flex flex-row justify-between gap-4 border border-black" {
            p { (todo.content) }
            input type="checkbox" checked[todo.completed]
                hx-post={ "/todos/toggle/" (todo.id) } hx-target="closest div" hx-swap="outerHTML";
            button class="px-1.5 bg-red-500 rounded"
                hx-delete={ "/todos/" (todo.id) } hx-swap="outerHTML" hx-target="closest div" {
                "✕"
            }
        }
    }
}

pub fn todo_list(todos: &[Todo]) -> Markup {
    html! {
        div {
            @for todo in todos {
                (todo_item(todo))
            }
            (todo_form())
        }
    }
}

// new todos are inserted just before the form
pub fn todo_form() -> Markup {
    html! {
        form class="flex flex-row space-x-3" hx-post="/todos" hx-swap="beforebegin"
            "_"="on submit target.reset()" {
            input type="text" name="content" class="border border-black";
            button class="px-4 bg-green-500 rounded" { "Add" }
        }
    }
}

pub fn clicked() -> Markup {
    html! {
        div class="text-blue-500" { "I'm from the server!" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn todo(id: u64, content: &str, completed: bool) -> Todo {
        Todo {
            id,
            content: content.to_string(),
            completed,
        }
    }

    #[test]
    fn shell_loads_scripts_and_todos() {
        let page = shell(html! {}).into_string();
        assert!(page.starts_with("<!DOCTYPE html>"));
        for src in [HTMX_SRC, TAILWIND_SRC, HYPERSCRIPT_SRC] {
            assert!(page.contains(&format!(r#"<script src="{src}"></script>"#)));
        }
        assert!(page.contains(r#"hx-get="/todos" hx-trigger="load" hx-swap="innerHTML""#));
    }

    #[test]
    fn shell_wraps_content_in_body() {
        let page = shell(html! { p { "inside" } }).into_string();
        assert!(page.contains("<p>inside</p></body>"));
    }

    #[test]
    fn item_unchecked() {
        let item = todo_item(&todo(3, "buy milk", false)).into_string();
        assert!(item.contains("<p>buy milk</p>"));
        assert!(item.contains(r#"hx-post="/todos/toggle/3""#));
        assert!(item.contains(r#"hx-delete="/todos/3""#));
        assert!(!item.contains("checked"));
    }

    #[test]
    fn item_checked() {
        let item = todo_item(&todo(3, "buy milk", true)).into_string();
        assert!(item.contains(r#"type="checkbox" checked"#));
    }

    #[test]
    fn item_escapes_content() {
        let item = todo_item(&todo(1, "<script>alert(1)</script>", false)).into_string();
        assert!(!item.contains("<script>"));
        assert!(item.contains("&lt;script&gt;"));
    }

    #[test]
    fn list_keeps_order_and_ends_with_form() {
        let todos = [todo(2, "second", false), todo(1, "first", true)];
        let list = todo_list(&todos).into_string();
        let second = list.find("second").unwrap();
        let first = list.find("first").unwrap();
        let form = list.find("<form").unwrap();
        assert!(second < first && first < form);
        assert!(list.ends_with("</form></div>"));
    }

    #[test]
    fn empty_list_is_just_the_form() {
        let list = todo_list(&[]).into_string();
        assert_eq!(list, format!("<div>{}</div>", todo_form().into_string()));
    }

    #[test]
    fn form_posts_and_resets() {
        let form = todo_form().into_string();
        assert!(form.contains(r#"hx-post="/todos" hx-swap="beforebegin""#));
        assert!(form.contains(r#"_="on submit target.reset()""#));
        assert!(form.contains(r#"name="content""#));
    }

    #[test]
    fn rendering_is_deterministic() {
        let todos = [todo(1, "a", false), todo(2, "b", true)];
        assert_eq!(todo_list(&todos).into_string(), todo_list(&todos).into_string());
    }

    #[test]
    fn clicked_fragment() {
        assert_eq!(
            clicked().into_string(),
            r#"<div class="text-blue-500">I'm from the server!</div>"#
        );
    }
}
