use leptos::prelude::*;
use thaw::*;

/// Single full-width row used for the loading and empty states.
pub fn placeholder_row(colspan: &'static str, text: &'static str) -> Vec<AnyView> {
    vec![view! {
        <TableRow>
            <TableCell attr:colspan=colspan>
                <TableCellLayout>
                    <span class="text-muted">{text}</span>
                </TableCellLayout>
            </TableCell>
        </TableRow>
    }
    .into_any()]
}

pub fn active_badge(is_active: bool) -> AnyView {
    if is_active {
        view! {
            <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Success>
                "Active"
            </Badge>
        }
        .into_any()
    } else {
        view! {
            <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Danger>
                "Inactive"
            </Badge>
        }
        .into_any()
    }
}
