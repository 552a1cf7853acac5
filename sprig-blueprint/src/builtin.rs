//! The built-in blueprint set.
//!
//! Every path below is relative to the project's app directory (`App` by default).

use crate::{
    Blueprint, Incompatible, OptionKind, OptionSpec, ResolvedOptions, TemplateSelect,
    TemplateSpec,
};

/// All built-in blueprints, in the order `sprig list` shows them.
pub fn blueprints() -> Vec<Blueprint> {
    vec![COMPONENT, CONTAINER, SCREEN, LIST, REDUX, SAGA]
}

pub const COMPONENT: Blueprint = Blueprint {
    keyword: "component",
    description: "Presentational component with its stylesheet",
    templates: &[
        TemplateSpec {
            root: "Components",
            output: "{{dir}}{{stem}}.{{ext}}",
            template: TemplateSelect::Fixed("component/component"),
            when: None,
        },
        TemplateSpec {
            root: "Components",
            output: "{{dir}}Styles/{{stem}}Style.{{ext}}",
            template: TemplateSelect::Fixed("component/style"),
            when: None,
        },
    ],
    options: &[],
    constraints: &[],
    folder_mode: true,
    strip_suffix: None,
};

pub const CONTAINER: Blueprint = Blueprint {
    keyword: "container",
    description: "Redux-connected container with its stylesheet",
    templates: &[
        TemplateSpec {
            root: "Containers",
            output: "{{dir}}{{stem}}.{{ext}}",
            template: TemplateSelect::Fixed("container/container"),
            when: None,
        },
        TemplateSpec {
            root: "Containers",
            output: "{{dir}}Styles/{{stem}}Style.{{ext}}",
            template: TemplateSelect::Fixed("container/style"),
            when: None,
        },
    ],
    options: &[],
    constraints: &[],
    folder_mode: false,
    strip_suffix: None,
};

pub const SCREEN: Blueprint = Blueprint {
    keyword: "screen",
    description: "Screen container named <Name>Screen with its stylesheet",
    templates: &[
        TemplateSpec {
            root: "Containers",
            output: "{{dir}}{{stem}}Screen.{{ext}}",
            template: TemplateSelect::Fixed("screen/screen"),
            when: None,
        },
        TemplateSpec {
            root: "Containers",
            output: "{{dir}}Styles/{{stem}}ScreenStyle.{{ext}}",
            template: TemplateSelect::Fixed("screen/style"),
            when: None,
        },
    ],
    options: &[],
    constraints: &[],
    folder_mode: false,
    strip_suffix: Some("Screen"),
};

pub const LIST: Blueprint = Blueprint {
    keyword: "list",
    description: "List container (FlatList/ListView, rows or grid) with its stylesheet",
    templates: &[
        TemplateSpec {
            root: "Containers",
            output: "{{dir}}{{stem}}.{{ext}}",
            template: TemplateSelect::ByOptions(list_container),
            when: None,
        },
        TemplateSpec {
            root: "Containers",
            output: "{{dir}}Styles/{{stem}}Style.{{ext}}",
            template: TemplateSelect::ByOptions(list_style),
            when: None,
        },
    ],
    options: &[
        OptionSpec {
            name: "type",
            description: "Row layout of the list",
            kind: OptionKind::Choice {
                allowed: &["Row", "Grid"],
                default: "Row",
            },
        },
        OptionSpec {
            name: "codeType",
            description: "List component to generate",
            kind: OptionKind::Choice {
                allowed: &["flatlist", "listview"],
                default: "flatlist",
            },
        },
        OptionSpec {
            name: "dataType",
            description: "Shape of the list data",
            kind: OptionKind::Choice {
                allowed: &["Single", "Sectioned"],
                default: "Single",
            },
        },
    ],
    constraints: &[Incompatible {
        first: ("type", "Grid"),
        second: ("dataType", "Sectioned"),
        reason: "grid layouts wrap a single flat data set; use --type=Row for sectioned data",
    }],
    folder_mode: false,
    strip_suffix: None,
};

pub const REDUX: Blueprint = Blueprint {
    keyword: "redux",
    description: "Reducer, action creators and selectors",
    templates: &[
        TemplateSpec {
            root: "Redux",
            output: "{{dir}}{{stem}}Redux.{{ext}}",
            template: TemplateSelect::Fixed("redux/redux"),
            when: None,
        },
        TemplateSpec {
            root: "Tests/Redux",
            output: "{{dir}}{{stem}}ReduxTest.{{ext}}",
            template: TemplateSelect::Fixed("redux/test"),
            when: Some("tests"),
        },
    ],
    options: &[OptionSpec {
        name: "tests",
        description: "Also generate a reducer test",
        kind: OptionKind::Flag { default: false },
    }],
    constraints: &[],
    folder_mode: false,
    strip_suffix: Some("Redux"),
};

pub const SAGA: Blueprint = Blueprint {
    keyword: "saga",
    description: "Saga calling the API and dispatching results",
    templates: &[
        TemplateSpec {
            root: "Sagas",
            output: "{{dir}}{{stem}}Sagas.{{ext}}",
            template: TemplateSelect::Fixed("saga/saga"),
            when: None,
        },
        TemplateSpec {
            root: "Tests/Sagas",
            output: "{{dir}}{{stem}}SagasTest.{{ext}}",
            template: TemplateSelect::Fixed("saga/test"),
            when: Some("tests"),
        },
    ],
    options: &[OptionSpec {
        name: "tests",
        description: "Also generate a saga test",
        kind: OptionKind::Flag { default: false },
    }],
    constraints: &[],
    folder_mode: false,
    strip_suffix: Some("Sagas"),
};

fn list_container(options: &ResolvedOptions) -> &'static str {
    let sectioned = options.is("dataType", "Sectioned");
    match (options.choice("codeType"), sectioned) {
        (Some("listview"), true) => "list/listview-sections",
        (Some("listview"), false) => "list/listview",
        (_, true) => "list/flatlist-sections",
        (_, false) => "list/flatlist",
    }
}

fn list_style(options: &ResolvedOptions) -> &'static str {
    if options.is("type", "Grid") {
        "list/style-grid"
    } else {
        "list/style-row"
    }
}
