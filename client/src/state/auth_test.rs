use super::*;

fn signup() -> SignupForm {
    SignupForm {
        first_name: "Ama".to_owned(),
        last_name: "Owusu".to_owned(),
        email: "ama.owusu@ashesi.edu.gh".to_owned(),
        password: "hunter22".to_owned(),
        confirm_password: "hunter22".to_owned(),
    }
}

#[test]
fn login_requires_both_fields() {
    let mut form = LoginForm { email: "a@ashesi.edu.gh".to_owned(), password: String::new() };
    assert!(form.request().is_none());
    form.password = "pw".to_owned();
    assert_eq!(form.request().unwrap().email, "a@ashesi.edu.gh");
}

#[test]
fn login_trims_email() {
    let form = LoginForm { email: "  a@ashesi.edu.gh ".to_owned(), password: "pw".to_owned() };
    assert_eq!(form.request().unwrap().email, "a@ashesi.edu.gh");
}

#[test]
fn signup_accepts_institution_address() {
    let request = signup().validate().unwrap();
    assert_eq!(request.first_name, "Ama");
    let body = serde_json::to_value(&request).unwrap();
    assert_eq!(body["firstName"], "Ama");
    assert_eq!(body["lastName"], "Owusu");
}

#[test]
fn signup_domain_check_ignores_case() {
    let form = SignupForm { email: "Ama@Ashesi.EDU.gh".to_owned(), ..signup() };
    assert!(form.validate().is_ok());
}

#[test]
fn signup_rejects_foreign_domain() {
    let form = SignupForm { email: "ama@gmail.com".to_owned(), ..signup() };
    assert_eq!(form.validate(), Err(SignupError::ForeignDomain));
    assert_eq!(SignupError::ForeignDomain.message(), "Only Ashesi email addresses are allowed");
}

#[test]
fn signup_rejects_password_mismatch() {
    let form = SignupForm { confirm_password: "hunter23".to_owned(), ..signup() };
    assert_eq!(form.validate(), Err(SignupError::PasswordMismatch));
}

#[test]
fn signup_rejects_blank_name() {
    let form = SignupForm { last_name: " ".to_owned(), ..signup() };
    assert_eq!(form.validate(), Err(SignupError::MissingField));
}
