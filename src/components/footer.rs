use chrono::{Datelike, Local};
use leptos::prelude::*;

pub const OWNER: &str = "Vorpal56";
pub const GITHUB_PROFILE_URL: &str = "https://github.com/vorpal56";
pub const GITHUB_ICON_PATH: &str = "/images/icons/common/github.png";
pub const LEAGUE_WIKI_URL: &str = "https://leagueoflegends.fandom.com/wiki/League_of_Legends_Wiki";
pub const MERAKI_ANALYTICS_URL: &str = "https://github.com/meraki-analytics";

pub const TRADEMARK_DISCLAIMER: &str = "League Theory Crafter isn’t endorsed by Riot Games and \
doesn’t reflect the views or opinions of Riot Games or anyone officially involved in producing \
or managing League of Legends. League of Legends and Riot Games are trademarks or registered \
trademarks of Riot Games, Inc. League of Legends © Riot Games, Inc.";

/// Calendar year of the local clock, read on every call.
pub fn current_year() -> i32 {
    Local::now().year()
}

pub fn copyright_line(year: i32) -> String {
    format!("{year} © {OWNER}")
}

#[component]
pub fn Footer() -> impl IntoView {
    let copyright = copyright_line(current_year());

    view! {
        <footer class="footer">
            <div class="container">
                <div class="footer-name">{copyright}</div>
                <div class="footer-links">
                    <a
                        class="footer-link"
                        href=GITHUB_PROFILE_URL
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        <img class="footer-image" src=GITHUB_ICON_PATH alt="GitHub" />
                    </a>
                </div>
                <div class="credits">
                    <span>{TRADEMARK_DISCLAIMER}</span>
                </div>
                <div class="credits">
                    <span>
                        "Big thanks to the "
                        <a href=LEAGUE_WIKI_URL>"League of Legends Wiki"</a>
                        " and the team at "
                        <a href=MERAKI_ANALYTICS_URL>"Meraki Analytics"</a>
                        " for providing free and available data used in this application."
                    </span>
                </div>
            </div>
        </footer>
    }
}
