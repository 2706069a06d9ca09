use yew::prelude::*;

use crate::components::reveal_section::RevealSection;
use crate::components::seo::{use_seo, SeoMeta};
use crate::data::editorial::{format_date, newest_first, ARTICLES, EPISODES, PRESS_RELEASES};

#[function_component(Magazine)]
pub fn magazine() -> Html {
    use_seo(SeoMeta::new(
        "Magazine",
        "Long reads and hands-on impressions from the show floor.",
    ));

    html! {
        <div class="editorial-page magazine-page">
            <h1>{"Magazine"}</h1>
            { for newest_first(ARTICLES, |a| a.published).into_iter().map(|article| html! {
                <RevealSection id={article.slug} class={classes!("article-card")}>
                    <img src={article.image} alt="" loading="lazy" />
                    <h2>{ article.title }</h2>
                    <p class="byline">{ format!("{} · {}", article.author, format_date(article.published)) }</p>
                    <p>{ article.summary }</p>
                </RevealSection>
            }) }
        </div>
    }
}

#[function_component(Podcast)]
pub fn podcast() -> Html {
    use_seo(SeoMeta::new(
        "Podcast",
        "Daily conversations recorded live with the people behind this year's launches.",
    ));

    html! {
        <div class="editorial-page podcast-page">
            <h1>{"Podcast"}</h1>
            { for newest_first(EPISODES, |e| e.published).into_iter().map(|episode| html! {
                <RevealSection class={classes!("episode-card")}>
                    <span class="episode-number">{ format!("Episode {}", episode.number) }</span>
                    <h2>{ episode.title }</h2>
                    <p class="byline">
                        { format!("{} · {} min · with {}", format_date(episode.published), episode.duration_minutes, episode.guests.join(", ")) }
                    </p>
                    <audio controls=true preload="none" src={episode.audio_url} />
                </RevealSection>
            }) }
        </div>
    }
}

#[function_component(Press)]
pub fn press() -> Html {
    use_seo(SeoMeta::new(
        "Press",
        "Announcements, press releases and media contacts.",
    ));

    html! {
        <div class="editorial-page press-page">
            <h1>{"Press"}</h1>
            { for newest_first(PRESS_RELEASES, |p| p.published).into_iter().map(|release| html! {
                <RevealSection class={classes!("press-release")}>
                    <p class="byline">{ format_date(release.published) }</p>
                    <h2>{ release.headline }</h2>
                    <p>{ release.body }</p>
                </RevealSection>
            }) }
            <p class="press-contact">{"Media enquiries go through the contact page."}</p>
        </div>
    }
}
