use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(PrivacyPolicy)]
pub fn privacy_policy() -> Html {
    html! {
        <div class="legal-page">
            <Link<Route> to={Route::Home} classes="legal-back">{ "← Back to Proshar" }</Link<Route>>
            <h1>{ "Privacy Policy" }</h1>
            <p>
                { "Proshar processes pharmacy operational data solely to provide the \
                   service. We do not sell data, and patient-identifying records never \
                   leave your tenant." }
            </p>
            <h2>{ "What we collect" }</h2>
            <p>
                { "Account details you provide, and usage events needed to operate and \
                   secure the platform. Ledger, inventory, and prescription data belong \
                   to your pharmacy." }
            </p>
            <h2>{ "How it is protected" }</h2>
            <p>
                { "Data is encrypted in transit and at rest. Access is role-scoped and \
                   audited. We maintain HIPAA compliance and SOC 2 Type II \
                   certification." }
            </p>
            <h2>{ "Contact" }</h2>
            <p>{ "privacy@proshar.app" }</p>
        </div>
    }
}

#[function_component(TermsAndConditions)]
pub fn terms_and_conditions() -> Html {
    html! {
        <div class="legal-page">
            <Link<Route> to={Route::Home} classes="legal-back">{ "← Back to Proshar" }</Link<Route>>
            <h1>{ "Terms of Service" }</h1>
            <p>
                { "By using Proshar you agree to use the service lawfully and in line \
                   with the regulations that govern your pharmacy." }
            </p>
            <h2>{ "Service" }</h2>
            <p>
                { "Proshar provides pharmacy management software on a subscription \
                   basis. Availability targets and support terms are set out in your \
                   order form." }
            </p>
            <h2>{ "Your data" }</h2>
            <p>
                { "You retain ownership of all data you store in Proshar. We process it \
                   only as needed to provide the service, per the Privacy Policy." }
            </p>
            <h2>{ "Liability" }</h2>
            <p>
                { "The service is provided as-is; our aggregate liability is capped at \
                   the fees paid in the preceding twelve months." }
            </p>
        </div>
    }
}
