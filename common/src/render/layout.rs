use crate::*;
use crate::gallery::Gallery;

//Render basic navigation link which highlights itself if we're on that page
pub fn main_nav_link(data: &MainLayoutData, text: &str, href: &str) -> Markup {
    let mut class = String::from("plainlink headertab");
    if data.current_path.starts_with(href) { class.push_str(" current"); }
    html! {
        a.(class) href=(data.links.http(href)) { (text) }
    }
}

pub fn header(data: &MainLayoutData) -> Markup {
    html! {
        header."controlbar" {
            nav {
                a."plainlink" #"homelink" href=(data.links.http("/")) { "Flickr" }
                (main_nav_link(data, "Recent", "/recent"))
                (main_nav_link(data, "Search", "/search"))
                //Both of these list a specific user's photos
                @if data.settings.user_id.is_some() {
                    (main_nav_link(data, "Contacts", "/contacts"))
                    (main_nav_link(data, "Sets", "/sets"))
                }
            }
        }
        @if !data.settings.has_api_key() {
            div."alert" { "No flickr api key is configured; every gallery will be empty." }
        }
    }
}

pub fn layout(data: &MainLayoutData, title: &str, page: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                (data.links.style("/gallery.css"))
            }
            body {
                (header(data))
                main { (page) }
            }
        }
    }
}

/// The thumbnails (or the reason there are none). The next link only shows up under a
/// gallery that actually has photos.
pub fn gallery_body(gallery: &Gallery, next: Option<&str>) -> Markup {
    html! {
        @if let Some(error) = gallery.error() {
            p."error" { (error.to_user_string()) }
        }
        div."gallery" data-method=(gallery.method.as_str()) {
            @for thumbnail in &gallery.thumbnails {
                (thumbnail)
            }
        }
        @if gallery.error().is_none() && gallery.thumbnails.is_empty() {
            p."aside" { "No photos!" }
        }
        @if let Some(next) = next {
            @if gallery.error().is_none() && !gallery.thumbnails.is_empty() {
                a."plainlink next" href=(next) { "Next page" }
            }
        }
    }
}

pub fn gallery_page(data: &MainLayoutData, title: &str, gallery: &Gallery, next: Option<&str>) -> String {
    layout(data, title, html! {
        h1 { (title) }
        (gallery_body(gallery, next))
    }).into_string()
}

pub fn search_page(data: &MainLayoutData, text: Option<&str>, gallery: Option<&Gallery>, next: Option<&str>) -> String {
    layout(data, "Search", html! {
        h1 { "Search" }
        form method="GET" action=(data.links.http("/search")) {
            input type="text" name="text" value=[text] placeholder="Search photos";
            input type="submit" value="Search";
        }
        @if let Some(gallery) = gallery {
            (gallery_body(gallery, next))
        }
    }).into_string()
}

pub fn index_page(data: &MainLayoutData) -> String {
    layout(data, "Flickr galleries", html! {
        h1 { "Flickr galleries" }
        ul {
            li { a href=(data.links.http("/recent")) { "Recent photos" } }
            li { a href=(data.links.http("/search")) { "Search" } }
            @if let Some(user_id) = &data.settings.user_id {
                li { a href=(data.links.http("/contacts")) { "Photos from " (user_id) "'s contacts" } }
                li { a href=(data.links.http("/sets")) { (user_id) "'s photosets" } }
            }
        }
    }).into_string()
}
