//! Template sources shipped with the built-in blueprints.

/// `(template id, handlebars source)` for every built-in template.
pub const BUILTIN_TEMPLATES: &[(&str, &str)] = &[
    (
        "component/component",
        include_str!("../templates/component/component.hbs"),
    ),
    (
        "component/style",
        include_str!("../templates/component/style.hbs"),
    ),
    (
        "container/container",
        include_str!("../templates/container/container.hbs"),
    ),
    (
        "container/style",
        include_str!("../templates/container/style.hbs"),
    ),
    ("screen/screen", include_str!("../templates/screen/screen.hbs")),
    ("screen/style", include_str!("../templates/screen/style.hbs")),
    ("list/flatlist", include_str!("../templates/list/flatlist.hbs")),
    (
        "list/flatlist-sections",
        include_str!("../templates/list/flatlist-sections.hbs"),
    ),
    ("list/listview", include_str!("../templates/list/listview.hbs")),
    (
        "list/listview-sections",
        include_str!("../templates/list/listview-sections.hbs"),
    ),
    ("list/style-row", include_str!("../templates/list/style-row.hbs")),
    (
        "list/style-grid",
        include_str!("../templates/list/style-grid.hbs"),
    ),
    ("redux/redux", include_str!("../templates/redux/redux.hbs")),
    ("redux/test", include_str!("../templates/redux/test.hbs")),
    ("saga/saga", include_str!("../templates/saga/saga.hbs")),
    ("saga/test", include_str!("../templates/saga/test.hbs")),
];
