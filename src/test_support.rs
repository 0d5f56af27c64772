//! The cafe landing page rebuilt in a [`MemoryDom`] for tests.

use std::rc::Rc;

use crate::dom::{Dom, MemoryDom, NodeId};

pub struct Page {
    pub dom: Rc<MemoryDom>,
    pub navbar: NodeId,
    pub hamburger: NodeId,
    pub hamburger_bar: NodeId,
    pub nav_links: NodeId,
    /// In-page anchors: home, menu, about, gallery, contact
    pub anchors: Vec<NodeId>,
    pub external_link: NodeId,
    pub hero: NodeId,
    /// Sections: home, menu, about, gallery, contact
    pub sections: Vec<NodeId>,
    /// Tab buttons: coffee, tea, pastries (pastries has no panel)
    pub tab_buttons: Vec<NodeId>,
    pub coffee_panel: NodeId,
    pub tea_panel: NodeId,
    pub coffee_cards: Vec<NodeId>,
    pub tea_cards: Vec<NodeId>,
    pub about_cards: Vec<NodeId>,
    pub about_note: NodeId,
    pub gallery_items: Vec<NodeId>,
    pub gallery_images: Vec<NodeId>,
    pub lightbox: NodeId,
    pub lightbox_image: NodeId,
    pub lightbox_close: NodeId,
    pub lightbox_prev: NodeId,
    pub lightbox_next: NodeId,
    pub form: NodeId,
    pub name: NodeId,
    pub email: NodeId,
    pub message: NodeId,
    pub submit: NodeId,
}

pub const GALLERY: [(&str, &str); 3] = [
    ("img/chai.jpg", "Masala chai"),
    ("img/bun-maska.jpg", "Bun maska"),
    ("img/interior.jpg", "Bentwood chairs"),
];

pub fn cafe_page() -> Page {
    let dom = Rc::new(MemoryDom::new());
    let body = NodeId::BODY;

    // Navigation
    let navbar = dom.append(&body, "nav", &[("id", "navbar"), ("class", "navbar")]);
    let hamburger = dom.append(
        &navbar,
        "button",
        &[
            ("id", "hamburger"),
            ("class", "hamburger"),
            ("aria-expanded", "false"),
        ],
    );
    let hamburger_bar = dom.append(&hamburger, "span", &[("class", "bar")]);
    let nav_links = dom.append(&navbar, "ul", &[("id", "navLinks"), ("class", "nav-links")]);
    let anchors = ["home", "menu", "about", "gallery", "contact"]
        .iter()
        .map(|id| {
            let item = dom.append(&nav_links, "li", &[]);
            let href = format!("#{id}");
            dom.append(&item, "a", &[("href", href.as_str())])
        })
        .collect();
    let item = dom.append(&nav_links, "li", &[]);
    let external_link = dom.append(&item, "a", &[("href", "https://instagram.com/iranicafe")]);

    // Hero
    let home = dom.append(&body, "section", &[("id", "home"), ("class", "hero")]);
    let hero = dom.append(&home, "div", &[("class", "hero-content")]);

    // Menu tabs
    let menu = dom.append(&body, "section", &[("id", "menu")]);
    let tab_bar = dom.append(&menu, "div", &[("class", "menu-tabs")]);
    let tab_buttons = vec![
        dom.append(
            &tab_bar,
            "button",
            &[
                ("class", "tab-btn active"),
                ("data-tab", "coffee"),
                ("aria-selected", "true"),
            ],
        ),
        dom.append(
            &tab_bar,
            "button",
            &[
                ("class", "tab-btn"),
                ("data-tab", "tea"),
                ("aria-selected", "false"),
            ],
        ),
        dom.append(
            &tab_bar,
            "button",
            &[
                ("class", "tab-btn"),
                ("data-tab", "pastries"),
                ("aria-selected", "false"),
            ],
        ),
    ];
    let coffee_panel = dom.append(
        &menu,
        "div",
        &[("id", "tab-coffee"), ("class", "menu-panel active")],
    );
    let coffee_cards = (0..3)
        .map(|_| dom.append(&coffee_panel, "article", &[("class", "menu-card reveal")]))
        .collect();
    let tea_panel = dom.append(
        &menu,
        "div",
        &[("id", "tab-tea"), ("class", "menu-panel"), ("hidden", "")],
    );
    let tea_cards = (0..2)
        .map(|_| dom.append(&tea_panel, "article", &[("class", "menu-card reveal")]))
        .collect();

    // About
    let about = dom.append(&body, "section", &[("id", "about")]);
    let grid = dom.append(&about, "div", &[("class", "about-grid")]);
    let about_cards = (0..3)
        .map(|_| dom.append(&grid, "div", &[("class", "about-card reveal")]))
        .collect();
    let about_note = dom.append(&about, "p", &[("class", "reveal")]);

    // Gallery
    let gallery = dom.append(&body, "section", &[("id", "gallery")]);
    let gallery_grid = dom.append(&gallery, "div", &[("class", "gallery-grid")]);
    let mut gallery_items = Vec::new();
    let mut gallery_images = Vec::new();
    for (src, alt) in GALLERY {
        let item = dom.append(
            &gallery_grid,
            "figure",
            &[
                ("class", "gallery-item"),
                ("data-src", src),
                ("data-alt", alt),
            ],
        );
        gallery_images.push(dom.append(&item, "img", &[("src", src), ("alt", alt)]));
        gallery_items.push(item);
    }
    let lightbox = dom.append(
        &body,
        "div",
        &[("id", "lightbox"), ("class", "lightbox"), ("hidden", "")],
    );
    let lightbox_close = dom.append(&lightbox, "button", &[("id", "lbClose")]);
    let lightbox_prev = dom.append(&lightbox, "button", &[("id", "lbPrev")]);
    let lightbox_image = dom.append(&lightbox, "img", &[("id", "lbImg")]);
    let lightbox_next = dom.append(&lightbox, "button", &[("id", "lbNext")]);

    // Contact
    let contact = dom.append(&body, "section", &[("id", "contact")]);
    let form = dom.append(&contact, "form", &[("id", "contactForm")]);
    let name = dom.append(&form, "input", &[("id", "name"), ("type", "text")]);
    let email = dom.append(&form, "input", &[("id", "email"), ("type", "email")]);
    let message = dom.append(&form, "textarea", &[("id", "message")]);
    let submit = dom.append(&form, "button", &[("type", "submit"), ("class", "btn")]);
    dom.set_text(&submit, "Send Message");

    Page {
        sections: vec![home, menu, about, gallery, contact],
        dom,
        navbar,
        hamburger,
        hamburger_bar,
        nav_links,
        anchors,
        external_link,
        hero,
        tab_buttons,
        coffee_panel,
        tea_panel,
        coffee_cards,
        tea_cards,
        about_cards,
        about_note,
        gallery_items,
        gallery_images,
        lightbox,
        lightbox_image,
        lightbox_close,
        lightbox_prev,
        lightbox_next,
        form,
        name,
        email,
        message,
        submit,
    }
}

impl Page {
    pub fn fill_form(&self, name: &str, email: &str, message: &str) {
        self.dom.set_value(&self.name, name);
        self.dom.set_value(&self.email, email);
        self.dom.set_value(&self.message, message);
    }
}
