// ABOUTME: Integration tests driving the builtin site adapters over synthetic documents.
// ABOUTME: Covers traversal bounds, listing exclusions, and end-to-end article extraction.

use kiosque::{Document, PageType, Site, Visit};
use url::Url;

fn doc(html: &str, url: &str) -> Document {
    Document::parse(html, Url::parse(url).unwrap())
}

mod lesechos_flow {
    use super::*;
    use pretty_assertions::assert_eq;

    const ROOT_HTML: &str = r#"
        <html><body>
        <nav>
            <a href="/a-la-une">À la une</a>
            <a href="/monde">Monde</a>
            <a href="/economie">Économie</a>
            <a href="/abonnes">Espace abonnés</a>
        </nav>
        </body></html>
    "#;

    #[test]
    fn root_sweeps_each_category_with_two_hundred_pages() {
        let site = Site::lesechos();
        let refs = site.visit(&doc(ROOT_HTML, "https://www.lesechos.fr"), PageType::Root);

        // 2 kept categories (featured first entry and subscriber last entry
        // dropped), 200 pages each.
        assert_eq!(refs.len(), 400);
        assert!(refs.iter().all(|r| r.page_type == PageType::TagListing));

        let monde: Vec<_> = refs
            .iter()
            .filter(|r| r.url.starts_with("https://www.lesechos.fr/monde"))
            .collect();
        assert_eq!(monde.len(), 200);
        assert_eq!(monde[0].url, "https://www.lesechos.fr/monde?page=1");
        assert_eq!(monde[199].url, "https://www.lesechos.fr/monde?page=200");
        for (i, r) in monde.iter().enumerate() {
            assert_eq!(r.url, format!("https://www.lesechos.fr/monde?page={}", i + 1));
        }
    }

    #[test]
    fn tag_listing_keeps_two_of_three_links() {
        let html = r#"
            <html><body>
            <article>
                <a href="/monde/europe/premier-article-1">Premier article</a>
                <div>teaser</div>
            </article>
            <article>
                <a href="/monde/europe/reserve-2">Sélection abonnés : réservé</a>
                <div>teaser</div>
            </article>
            <article>
                <a href="/monde/asie/troisieme-article-3">Troisième article</a>
                <div>teaser</div>
            </article>
            </body></html>
        "#;
        let site = Site::lesechos();
        let refs = site.visit(
            &doc(html, "https://www.lesechos.fr/monde?page=1"),
            PageType::TagListing,
        );
        assert_eq!(refs.len(), 2);
        assert!(refs.iter().all(|r| r.page_type == PageType::Article));
        assert_eq!(refs[0].url, "https://www.lesechos.fr/monde/europe/premier-article-1");
        assert_eq!(refs[1].url, "https://www.lesechos.fr/monde/asie/troisieme-article-3");
    }

    #[test]
    fn article_extraction_end_to_end() {
        let html = r#"
            <html><body>
            <header>
                <h1>Un titre d'article</h1>
                <p>La description de l'article.</p>
            </header>
            <span>Publié le 3 janv. 2023 à 08:00</span>
            <div data-testid="post-description"><h3>Intertitre</h3><p>Le corps de l'article. </p><p>Suite du corps.</p><script>track();</script></div>
            </body></html>
        "#;
        let site = Site::lesechos();
        let d = doc(html, "https://www.lesechos.fr/monde/europe/un-titre-123");
        let record = match site.handle(&d, PageType::Article) {
            Visit::Record(record) => record,
            Visit::Follow(_) => panic!("article pages yield records"),
        };

        assert_eq!(record.title.as_deref(), Some("Un titre d'article"));
        assert_eq!(record.description.as_deref(), Some("La description de l'article."));
        assert_eq!(record.tags, vec!["monde", "europe"]);
        assert_eq!(
            record.date,
            chrono::NaiveDate::from_ymd_opt(2023, 1, 3)
        );
        assert_eq!(
            record.content.as_deref(),
            Some("IntertitreLe corps de l'article. Suite du corps.")
        );
        assert_eq!(record.url, "https://www.lesechos.fr/monde/europe/un-titre-123");
    }

    #[test]
    fn blank_article_page_still_yields_a_record() {
        let site = Site::lesechos();
        let d = doc("<html><body></body></html>", "https://www.lesechos.fr/page");
        let record = site.extract(&d);
        assert_eq!(record.url, "https://www.lesechos.fr/page");
        assert!(record.title.is_none());
        assert!(record.tags.is_empty());
        assert!(record.description.is_none());
        assert!(record.date.is_none());
        assert!(record.content.is_none());
    }
}

mod liberation_flow {
    use super::*;
    use pretty_assertions::assert_eq;

    const ARCHIVE_LINK_CLASS: &str =
        "font_xs color_black margin-xxs-bottom decoration_none width_fit-content";

    #[test]
    fn root_emits_years_2021_down_to_1998() {
        let site = Site::liberation();
        let refs = site.visit(
            &doc("<html><body></body></html>", "https://www.liberation.fr"),
            PageType::Root,
        );
        assert_eq!(refs.len(), 24);
        assert!(refs.iter().all(|r| r.page_type == PageType::ArchiveYear));
        assert_eq!(refs[0].url, "https://www.liberation.fr/archives/2021/");
        assert_eq!(refs[1].url, "https://www.liberation.fr/archives/2020/");
        assert_eq!(refs[23].url, "https://www.liberation.fr/archives/1998/");
    }

    #[test]
    fn year_and_month_pages_share_the_link_list_selector() {
        let html = format!(
            r#"
            <html><body>
            <a class="{cls}" href="/archives/2021/janvier/">Janvier 2021</a>
            <a class="{cls}" href="/archives/2021/fevrier/">Février 2021</a>
            <a class="other" href="/ailleurs/">Ailleurs</a>
            </body></html>
            "#,
            cls = ARCHIVE_LINK_CLASS
        );
        let site = Site::liberation();

        let months = site.visit(
            &doc(&html, "https://www.liberation.fr/archives/2021/"),
            PageType::ArchiveYear,
        );
        assert_eq!(months.len(), 2);
        assert!(months.iter().all(|r| r.page_type == PageType::ArchiveMonth));
        assert_eq!(months[0].url, "https://www.liberation.fr/archives/2021/janvier/");

        let days = site.visit(
            &doc(&html, "https://www.liberation.fr/archives/2021/janvier/"),
            PageType::ArchiveMonth,
        );
        assert_eq!(days.len(), 2);
        assert!(days.iter().all(|r| r.page_type == PageType::ArchiveDay));
    }

    #[test]
    fn day_page_drops_subscriber_and_opinion_articles() {
        let html = r#"
            <html><body>
            <article><a href="/politique/un-article/">Un article</a></article>
            <article><span>Abonnés</span><a href="/politique/reserve/">Réservé</a></article>
            <article>
                <div class="font_black font_xs decoration_underline font_tertiary padding-xs-bottom">Tribune</div>
                <a href="/idees/tribune/">Tribune</a>
            </article>
            <article><a href="/societe/autre-article/">Autre article</a></article>
            </body></html>
        "#;
        let site = Site::liberation();
        let refs = site.visit(
            &doc(html, "https://www.liberation.fr/archives/2021/janvier/3-janvier-2021/"),
            PageType::ArchiveDay,
        );
        assert_eq!(refs.len(), 2);
        assert!(refs.iter().all(|r| r.page_type == PageType::Article));
        assert_eq!(refs[0].url, "https://www.liberation.fr/politique/un-article/");
        assert_eq!(refs[1].url, "https://www.liberation.fr/societe/autre-article/");
    }

    #[test]
    fn article_extraction_with_ordinal_date_and_tag_links() {
        let html = r#"
            <html><body>
            <h1>Titre de tribune</h1>
            <span class="font_md font_secondary font_line-height_lg display_block">Le chapo.</span>
            <div class="font_xs color_grey margin-xxs-right font_tertiary">publié le 1er mai 2021 à 12h04</div>
            <a class="color_grey hover_underline" href="/checknews/">CheckNews</a>
            <a class="color_grey hover_underline" href="/politique/elections/">Élections</a>
            <article class="article-body-wrapper mainbody"><p>Premier paragraphe. </p><p>Deuxième paragraphe.</p><script>var t;</script></article>
            </body></html>
        "#;
        let site = Site::liberation();
        let record = site.extract(&doc(html, "https://www.liberation.fr/politique/elections/titre-tribune/"));

        assert_eq!(record.title.as_deref(), Some("Titre de tribune"));
        assert_eq!(record.description.as_deref(), Some("Le chapo."));
        // last tag link wins, split into path segments
        assert_eq!(record.tags, vec!["politique", "elections"]);
        assert_eq!(record.date, chrono::NaiveDate::from_ymd_opt(2021, 5, 1));
        assert_eq!(
            record.content.as_deref(),
            Some("Premier paragraphe. Deuxième paragraphe.")
        );
    }

    #[test]
    fn ordinal_and_bare_first_day_extract_identically() {
        let site = Site::liberation();
        let template = |day: &str| {
            format!(
                r#"<html><body>
                <div class="font_xs color_grey margin-xxs-right font_tertiary">publié le {} juin 2020</div>
                </body></html>"#,
                day
            )
        };
        let ordinal = site.extract(&doc(
            &template("1er"),
            "https://www.liberation.fr/societe/x/",
        ));
        let bare = site.extract(&doc(&template("1"), "https://www.liberation.fr/societe/x/"));
        assert_eq!(ordinal.date, bare.date);
        assert_eq!(ordinal.date, chrono::NaiveDate::from_ymd_opt(2020, 6, 1));
    }

    #[test]
    fn unknown_month_token_leaves_date_absent() {
        // lesechos vocabulary uses abbreviated tokens; the full name is a
        // different site's vocabulary and must not parse here.
        let html = r#"
            <html><body>
            <header><h1>Titre</h1></header>
            <span>Publié le 3 janvier 2023 à 08:00</span>
            </body></html>
        "#;
        let site = Site::lesechos();
        let record = site.extract(&doc(html, "https://www.lesechos.fr/monde/x"));
        assert_eq!(record.title.as_deref(), Some("Titre"));
        assert!(record.date.is_none());
    }
}

mod engine_contract {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn seeds_classify_and_chain_through_the_archive() {
        let site = Site::liberation();
        let seeds = site.seed_requests();
        assert_eq!(seeds.len(), 1);
        assert_eq!(seeds[0].page_type, PageType::Root);

        // the engine echoes the classification back; every level knows the
        // type of its children at emission time
        assert_eq!(
            site.classify_link(PageType::Root, "/archives/2021/"),
            Some(PageType::ArchiveYear)
        );
        assert_eq!(
            site.classify_link(PageType::ArchiveDay, "/politique/x/"),
            Some(PageType::Article)
        );
    }

    #[test]
    fn handle_returns_empty_follow_for_blank_non_terminal_pages() {
        let site = Site::lesechos();
        let d = doc("<html><body></body></html>", "https://www.lesechos.fr/monde?page=173");
        match site.handle(&d, PageType::TagListing) {
            Visit::Follow(refs) => assert!(refs.is_empty()),
            Visit::Record(_) => panic!("non-terminal pages never yield records"),
        }
    }

    #[test]
    fn records_serialize_for_the_sink() {
        let html = r#"
            <html><body>
            <header><h1>Titre</h1></header>
            <span>Publié le 12 mars 2024 à 10:00</span>
            </body></html>
        "#;
        let site = Site::lesechos();
        let record = site.extract(&doc(html, "https://www.lesechos.fr/tech/medias/slug-9"));
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"2024-03-12\""));
        assert!(json.contains("\"tech\""));
    }
}
