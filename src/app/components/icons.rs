//! Inline SVG icons. All take a uniform `size` in px.
#![allow(non_snake_case)]

use crate::domain::models::IconProps;
use dioxus::prelude::*;

#[component]
fn Svg(size: u32, children: Element) -> Element {
    rsx! {
        svg {
            class: "c-icon",
            width: "{size}",
            height: "{size}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "1.8",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            {children}
        }
    }
}

pub fn HomeIcon(props: IconProps) -> Element {
    rsx! {
        Svg { size: props.size,
            path { d: "M3 11l9-7 9 7" }
            path { d: "M5 10v10h5v-6h4v6h5V10" }
        }
    }
}

pub fn NetworkIcon(props: IconProps) -> Element {
    rsx! {
        Svg { size: props.size,
            rect { x: "9", y: "3", width: "6", height: "5", rx: "1" }
            rect { x: "3", y: "16", width: "6", height: "5", rx: "1" }
            rect { x: "15", y: "16", width: "6", height: "5", rx: "1" }
            path { d: "M12 8v4M6 16v-4h12v4" }
        }
    }
}

pub fn ComplianceIcon(props: IconProps) -> Element {
    rsx! {
        Svg { size: props.size,
            rect { x: "5", y: "4", width: "14", height: "17", rx: "2" }
            path { d: "M9 4h6v3H9z" }
            path { d: "M9 13l2 2 4-4" }
        }
    }
}

pub fn AccountIcon(props: IconProps) -> Element {
    rsx! {
        Svg { size: props.size,
            circle { cx: "12", cy: "8", r: "4" }
            path { d: "M4 21c1.5-4 4.5-6 8-6s6.5 2 8 6" }
        }
    }
}

pub fn ChatIcon(props: IconProps) -> Element {
    rsx! {
        Svg { size: props.size,
            path { d: "M4 5h16v11H8l-4 4z" }
        }
    }
}

pub fn BookIcon(props: IconProps) -> Element {
    rsx! {
        Svg { size: props.size,
            path { d: "M4 5a2 2 0 0 1 2-2h5v17H6a2 2 0 0 0-2 2z" }
            path { d: "M20 5a2 2 0 0 0-2-2h-5v17h5a2 2 0 0 1 2 2z" }
        }
    }
}

pub fn InfoIcon(props: IconProps) -> Element {
    rsx! {
        Svg { size: props.size,
            circle { cx: "12", cy: "12", r: "9" }
            path { d: "M12 11v5M12 8h.01" }
        }
    }
}

pub fn MenuIcon(props: IconProps) -> Element {
    rsx! {
        Svg { size: props.size,
            path { d: "M4 6h16M4 12h16M4 18h16" }
        }
    }
}

pub fn PinIcon(props: IconProps) -> Element {
    rsx! {
        svg {
            class: "c-icon",
            width: "{props.size}",
            height: "{props.size}",
            view_box: "0 0 24 24",
            fill: "currentColor",
            "aria-hidden": "true",
            path { d: "M16 3l5 5-3 1-4 4 1 5-2 2-4-4-5 5-1-1 5-5-4-4 2-2 5 1 4-4z" }
        }
    }
}

pub fn PinOutlinedIcon(props: IconProps) -> Element {
    rsx! {
        Svg { size: props.size,
            path { d: "M16 3l5 5-3 1-4 4 1 5-2 2-4-4-5 5-1-1 5-5-4-4 2-2 5 1 4-4z" }
        }
    }
}

pub fn BellIcon(props: IconProps) -> Element {
    rsx! {
        Svg { size: props.size,
            path { d: "M6 16V11a6 6 0 0 1 12 0v5l2 2H4z" }
            path { d: "M10 21h4" }
        }
    }
}

pub fn SearchIcon(props: IconProps) -> Element {
    rsx! {
        Svg { size: props.size,
            circle { cx: "11", cy: "11", r: "7" }
            path { d: "M20 20l-4-4" }
        }
    }
}

pub fn TrashIcon(props: IconProps) -> Element {
    rsx! {
        Svg { size: props.size,
            path { d: "M4 6h16M9 6V4h6v2M6 6l1 14h10l1-14" }
        }
    }
}

pub fn PlusIcon(props: IconProps) -> Element {
    rsx! {
        Svg { size: props.size,
            path { d: "M12 5v14M5 12h14" }
        }
    }
}

pub fn DocIcon(props: IconProps) -> Element {
    rsx! {
        Svg { size: props.size,
            path { d: "M14 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V8z" }
            path { d: "M14 2v6h6M8 13h8M8 17h8M8 9h4" }
        }
    }
}

pub fn ShieldIcon(props: IconProps) -> Element {
    rsx! {
        Svg { size: props.size,
            path { d: "M12 3l8 3v6c0 5-3.5 9-8 10-4.5-1-8-5-8-10V6z" }
            path { d: "M9 12l2 2 4-4" }
        }
    }
}
