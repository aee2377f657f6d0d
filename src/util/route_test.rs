use super::*;

const ALL_ROUTES: [AppRoute; 6] = [
    AppRoute::SignUp,
    AppRoute::SignIn,
    AppRoute::Recipes,
    AppRoute::RecipeView { id: 7 },
    AppRoute::RecipeEdit { id: 7 },
    AppRoute::Profile,
];

// =============================================================
// Parsing
// =============================================================

#[test]
fn canonical_paths_parse_back_to_their_route() {
    for route in ALL_ROUTES {
        assert_eq!(AppRoute::parse(&route.path()), Some(route), "{route:?}");
    }
}

#[test]
fn missing_trailing_slash_is_tolerated() {
    assert_eq!(AppRoute::parse("/signin"), Some(AppRoute::SignIn));
    assert_eq!(AppRoute::parse("/recipe/view/12"), Some(AppRoute::RecipeView { id: 12 }));
}

#[test]
fn signed_recipe_ids_are_not_routes() {
    assert_eq!(AppRoute::parse("/recipe/view/+5/"), None);
    assert_eq!(AppRoute::parse("/recipe/edit/-5/"), None);
    assert_eq!(
        decide_route(SessionStatus::Authenticated, "/recipe/view/+5/"),
        RouteDecision::Redirect(AppRoute::Recipes)
    );
}

#[test]
fn leading_zero_ids_still_parse() {
    assert_eq!(AppRoute::parse("/recipe/view/007/"), Some(AppRoute::RecipeView { id: 7 }));
}

#[test]
fn query_and_fragment_are_ignored() {
    assert_eq!(AppRoute::parse("/recipes/?page=2"), Some(AppRoute::Recipes));
    assert_eq!(AppRoute::parse("/signup/#top"), Some(AppRoute::SignUp));
}

#[test]
fn unknown_or_malformed_paths_do_not_parse() {
    assert_eq!(AppRoute::parse("/"), None);
    assert_eq!(AppRoute::parse(""), None);
    assert_eq!(AppRoute::parse("/nope/"), None);
    assert_eq!(AppRoute::parse("/recipe/view/abc/"), None);
    assert_eq!(AppRoute::parse("/recipe/view/"), None);
    assert_eq!(AppRoute::parse("/recipes/extra/"), None);
}

// =============================================================
// Guard: anonymous
// =============================================================

#[test]
fn anonymous_users_are_sent_to_sign_in_from_protected_routes() {
    for route in ALL_ROUTES.into_iter().filter(|r| r.requires_session()) {
        assert_eq!(
            decide_route(SessionStatus::Anonymous, &route.path()),
            RouteDecision::Redirect(AppRoute::SignIn),
            "{route:?}"
        );
    }
}

#[test]
fn anonymous_users_may_render_auth_screens() {
    assert_eq!(decide_route(SessionStatus::Anonymous, "/signin/"), RouteDecision::Render(AppRoute::SignIn));
    assert_eq!(decide_route(SessionStatus::Anonymous, "/signup/"), RouteDecision::Render(AppRoute::SignUp));
}

#[test]
fn anonymous_unknown_path_reaches_sign_in_in_two_steps() {
    let first = decide_route(SessionStatus::Anonymous, "/somewhere/");
    assert_eq!(first, RouteDecision::Redirect(AppRoute::Recipes));
    let second = decide_route(SessionStatus::Anonymous, &AppRoute::Recipes.path());
    assert_eq!(second, RouteDecision::Redirect(AppRoute::SignIn));
}

// =============================================================
// Guard: authenticated
// =============================================================

#[test]
fn authenticated_users_skip_auth_screens() {
    assert_eq!(
        decide_route(SessionStatus::Authenticated, "/signin/"),
        RouteDecision::Redirect(AppRoute::Recipes)
    );
    assert_eq!(
        decide_route(SessionStatus::Authenticated, "/signup"),
        RouteDecision::Redirect(AppRoute::Recipes)
    );
}

#[test]
fn authenticated_users_render_protected_routes() {
    for route in ALL_ROUTES.into_iter().filter(|r| r.requires_session()) {
        assert_eq!(decide_route(SessionStatus::Authenticated, &route.path()), RouteDecision::Render(route));
    }
}

#[test]
fn authenticated_unknown_path_goes_to_recipes() {
    assert_eq!(decide_route(SessionStatus::Authenticated, "/"), RouteDecision::Redirect(AppRoute::Recipes));
}

#[test]
fn redirect_targets_are_stable() {
    for status in [SessionStatus::Anonymous, SessionStatus::Authenticated] {
        for path in ["/", "/signin/", "/signup/", "/recipes/", "/profile/", "/x/"] {
            let mut current = path.to_owned();
            for _ in 0..3 {
                match decide_route(status, &current) {
                    RouteDecision::Redirect(target) => current = target.path(),
                    RouteDecision::Render(route) => {
                        assert_eq!(decide_route(status, &route.path()), RouteDecision::Render(route));
                        break;
                    }
                }
            }
            assert!(matches!(decide_route(status, &current), RouteDecision::Render(_)), "{status:?} {path}");
        }
    }
}
