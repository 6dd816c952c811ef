//! Integration tests for the dashboard route table.

use flowboard_routes::{DEPLOYMENT_ROUTE, LinkResolver, Page, RouteParams, RouteTable};

#[test]
fn test_every_route_round_trips_through_build_and_match() {
  let table = RouteTable::dashboard();

  for route in table.routes() {
    let params: RouteParams = route
      .params()
      .map(|name| (name.to_string(), format!("{}-value", name)))
      .collect();

    let path = table.build(route.path, &params).expect("build route");
    let matched = table.match_path(&path).expect("match built path");

    assert_eq!(matched.route.page, route.page, "path {}", path);
    assert_eq!(matched.params, params);
  }
}

#[test]
fn test_dashboard_has_one_route_per_page() {
  let table = RouteTable::dashboard();
  let mut pages: Vec<Page> = table.routes().iter().map(|r| r.page).collect();
  let total = pages.len();
  pages.sort_by_key(|p| p.title());
  pages.dedup();
  assert_eq!(pages.len(), total);
  assert_eq!(total, 16);
}

#[test]
fn test_deployment_link_for_uuid() {
  let table = RouteTable::dashboard();
  let mut params = RouteParams::new();
  params.insert(
    "id".to_string(),
    "9a3c4f6e-2d1b-4c55-8f0a-7b6e5d4c3b2a".to_string(),
  );

  let href = table.resolve(DEPLOYMENT_ROUTE, &params).unwrap();
  assert_eq!(
    href,
    "/deployments/deployment/9a3c4f6e-2d1b-4c55-8f0a-7b6e5d4c3b2a"
  );

  let json = serde_json::to_value(table.match_path(&href).unwrap()).unwrap();
  assert_eq!(json["route"]["page"], "deployment");
  assert_eq!(json["params"]["id"], "9a3c4f6e-2d1b-4c55-8f0a-7b6e5d4c3b2a");
}
