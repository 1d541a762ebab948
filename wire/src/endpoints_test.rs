use super::*;

#[test]
fn with_id_appends_query_parameter() {
    let url = DELETE_EVENT.with_id(&RecordId::from(42));
    assert_eq!(url, "/api/events/delete_event?id=42");
}

#[test]
fn with_id_escapes_reserved_characters() {
    let url = DELETE_NEWS.with_id(&RecordId::from("a b&c"));
    assert_eq!(url, "/api/news/delete_news?id=a%20b%26c");
}

#[test]
fn with_id_keeps_unreserved_characters_and_escapes_utf8() {
    assert_eq!(DELETE_TEAM.with_id(&RecordId::from("u-1_2.3~")), "/api/teams/delete_team?id=u-1_2.3~");
    assert_eq!(DELETE_TEAM.with_id(&RecordId::from("é/?")), "/api/teams/delete_team?id=%C3%A9%2F%3F");
}

#[test]
fn delete_endpoints_use_delete_method() {
    for endpoint in [DELETE_ATHLETE, DELETE_EVENT, DELETE_NEWS, DELETE_HIGHLIGHT, DELETE_TEAM] {
        assert_eq!(endpoint.method, Method::Delete, "{}", endpoint.path);
        assert_eq!(endpoint.shape, Shape::Ack, "{}", endpoint.path);
    }
}

#[test]
fn list_endpoints_record_their_envelope_quirks() {
    assert_eq!(GET_SPORTS.shape, Shape::List);
    assert_eq!(GET_HIGHLIGHTS.shape, Shape::List);
    assert_eq!(GET_TEAMS.shape, Shape::List);
    assert_eq!(GET_ATHLETES.shape, Shape::Status("athletes"));
    assert_eq!(GET_EVENTS.shape, Shape::Status("events"));
    assert_eq!(GET_NEWS.shape, Shape::Status("news"));
    assert_eq!(GET_SHOP.shape, Shape::Status("items"));
    assert_eq!(GET_ATHLETES_OF_WEEK.shape, Shape::Status("athletesOfTheWeek"));
    assert_eq!(LOGIN.shape, Shape::Success(Some("user")));
}

#[test]
fn method_names_are_uppercase() {
    assert_eq!(Method::Get.as_str(), "GET");
    assert_eq!(Method::Post.as_str(), "POST");
    assert_eq!(Method::Delete.as_str(), "DELETE");
}
