use yew::{Html, Properties, classes, function_component, html};
use yew_router::prelude::{Link, Routable, use_location};

use crate::routes::{Route, is_nav_active};

#[derive(Properties, PartialEq, Eq)]
pub struct NavItemProps {
    pub route: Route,
}

#[function_component(NavItem)]
pub fn nav_item(props: &NavItemProps) -> Html {
    let current_path = use_location()
        .map(|location| location.path().to_string())
        .unwrap_or_default();
    let route = props.route;

    let active_route_class = if is_nav_active(&current_path, &route.to_path()) {
        "menu-active"
    } else {
        ""
    };

    html! {
      <li>
          <Link<Route> to={route} classes={classes!("gap-3", active_route_class)}>
              <i class={classes!("fa-solid", "fa-fw", format!("fa-{}", route.icon()))}></i>
              {route.label()}
          </Link<Route>>
      </li>
    }
}
