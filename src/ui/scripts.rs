//! Inline scripts for the server-rendered page.
//!
//! Dioxus SSR output carries no event handlers, so the served page is wired
//! with plain scripts:
//! - head: preference helpers, the `js` root marker and the dark marker,
//!   before first paint
//! - end of body: the remaining preference markers, then [`page_script`]
//!   which attaches every listener
//!
//! Everything page-specific (storage slot, bindings, notice texts,
//! thresholds) is serialized from the Rust side into a `PORTFOLIO` object.
//! Reading rules match [`crate::prefs::PreferenceStore::load`]: an
//! unreadable or malformed record means defaults, and legacy flags only
//! count while the current slot is absent.

use serde_json::{json, Value};

use crate::notice::{Notice, NoticeTone, DEFAULT_NOTICE_MS, PHOTO_FAILED};
use crate::prefs::{PreferenceBinding, PreferenceRecord, Selector, BINDINGS, PREF_KEY};
use crate::scroll::{NAV_BREAKPOINT_PX, REVEAL_THRESHOLD, SCROLLSPY_THRESHOLD, SCROLL_MARGIN_PX};

const PREFS_JS: &str = r#"
document.documentElement.classList.add('js');
function portfolioPref(field, fallback, legacy) {
    var raw = null, p = null;
    try { raw = localStorage.getItem('__PREF_KEY__'); } catch (e) { return fallback; }
    if (raw === null) {
        for (var i = 0; i < legacy.length; i++) {
            var flag = null;
            try { flag = localStorage.getItem(legacy[i]); } catch (e) {}
            if (flag !== null) flag = flag.trim();
            if (flag === '1') return true;
            if (flag === '0') return false;
        }
        return fallback;
    }
    try { p = JSON.parse(raw); } catch (e) { return fallback; }
    if (!p || typeof p !== 'object' || Array.isArray(p)) return fallback;
    var fields = [__FIELDS__];
    for (var j = 0; j < fields.length; j++) {
        if (fields[j] in p && typeof p[fields[j]] !== 'boolean') return fallback;
    }
    return typeof p[field] === 'boolean' ? p[field] : fallback;
}
function portfolioMark(selector, marker, on, control, pressed) {
    var el = document.querySelector(selector);
    if (el) el.classList.toggle(marker, on);
    var box = document.getElementById(control);
    if (box) box.checked = on;
    var button = pressed && document.getElementById(pressed);
    if (button) button.setAttribute('aria-pressed', on ? 'true' : 'false');
}
"#;

/// Listeners for every page interaction. Expects the head helpers and a
/// `PORTFOLIO` object (see [`page_config`]).
const PAGE_JS: &str = r#"
(function () {
    var C = PORTFOLIO;
    var doc = document;
    function byId(id) { return doc.getElementById(id); }
    function on(id, type, fn) { var el = byId(id); if (el) el.addEventListener(type, fn); }

    // ---- notices ----
    function toast(text, tone) {
        var box = doc.querySelector('.toasts');
        if (!box) return;
        var el = doc.createElement('div');
        el.className = C.toneClass[tone];
        el.textContent = text;
        el.addEventListener('click', function () { el.remove(); });
        box.appendChild(el);
        setTimeout(function () { el.remove(); }, C.noticeMs);
    }

    // ---- preferences ----
    var prefs = {};
    C.bindings.forEach(function (b) { prefs[b.field] = portfolioPref(b.field, C.defaults[b.field], b.legacy); });
    function save() {
        try { localStorage.setItem(C.key, JSON.stringify(prefs)); } catch (e) {}
    }
    function render() {
        C.bindings.forEach(function (b) { portfolioMark(b.target, b.marker, prefs[b.field], b.control, b.pressed); });
    }
    function setPref(field, value, notify) {
        prefs[field] = value;
        save();
        render();
        if (notify) toast(C.notices[field][value ? 'on' : 'off'], 'info');
    }
    C.bindings.forEach(function (b) {
        var box = byId(b.control);
        if (box) box.addEventListener('change', function () { setPref(b.field, box.checked, true); });
        if (b.pressed) on(b.pressed, 'click', function () { setPref(b.field, !prefs[b.field], false); });
    });
    on('pref-reset', 'click', function () {
        C.bindings.forEach(function (b) { prefs[b.field] = C.defaults[b.field]; });
        save();
        render();
        toast(C.notices.reset, 'info');
    });

    // ---- navigation ----
    var nav = doc.querySelector('.site-nav');
    var navToggle = doc.querySelector('.nav-toggle');
    function setNav(open) {
        if (!nav) return;
        nav.classList.toggle('open', open);
        if (navToggle) navToggle.setAttribute('aria-expanded', open ? 'true' : 'false');
    }
    if (navToggle) navToggle.addEventListener('click', function () { setNav(!nav.classList.contains('open')); });
    function scrollToSection(id) {
        var target = byId(id);
        if (!target) return;
        var navHeight = nav ? nav.offsetHeight : 0;
        var top = target.getBoundingClientRect().top + window.pageYOffset - navHeight - C.scrollMargin;
        window.scrollTo({ top: top, behavior: 'smooth' });
    }
    doc.querySelectorAll('a[data-scroll]').forEach(function (link) {
        link.addEventListener('click', function (e) {
            var href = link.getAttribute('href') || '';
            if (href.charAt(0) !== '#' || href.length < 2) return;
            e.preventDefault();
            setNav(false);
            scrollToSection(href.slice(1));
        });
    });
    window.addEventListener('resize', function () {
        if (window.innerWidth > C.navBreakpoint) setNav(false);
    });

    // ---- settings panel ----
    var panel = byId('settings-panel');
    function setSettings(open) {
        if (!panel) return;
        panel.classList.toggle('open', open);
        panel.setAttribute('aria-hidden', open ? 'false' : 'true');
    }
    on('open-settings', 'click', function (e) { e.stopPropagation(); setSettings(true); });
    on('close-settings', 'click', function () { setSettings(false); });
    doc.addEventListener('click', function (e) {
        if (panel && panel.classList.contains('open') && !panel.contains(e.target)) setSettings(false);
    });

    // ---- lightbox ----
    var lightbox = byId('lightbox');
    function closeLightbox() {
        if (!lightbox) return;
        lightbox.querySelectorAll('img').forEach(function (img) { img.removeAttribute('src'); img.remove(); });
        lightbox.classList.remove('open');
        lightbox.setAttribute('aria-hidden', 'true');
    }
    function openLightbox(src, alt) {
        if (!lightbox || !src) return;
        closeLightbox();
        var img = doc.createElement('img');
        img.src = src;
        img.alt = alt || '';
        img.addEventListener('click', function (e) { e.stopPropagation(); });
        lightbox.appendChild(img);
        lightbox.classList.add('open');
        lightbox.setAttribute('aria-hidden', 'false');
    }
    doc.querySelectorAll('[data-lightbox-src]').forEach(function (el) {
        el.addEventListener('click', function () {
            openLightbox(el.getAttribute('data-lightbox-src'), el.getAttribute('data-lightbox-alt'));
        });
    });
    if (lightbox) lightbox.addEventListener('click', closeLightbox);

    doc.addEventListener('keydown', function (e) {
        if (e.key !== 'Escape') return;
        setNav(false);
        setSettings(false);
        closeLightbox();
    });

    // ---- contact form (simulated send) ----
    var form = byId('contact-form');
    if (form) form.addEventListener('submit', function (e) {
        e.preventDefault();
        var email = byId('email'), message = byId('message');
        if (!email || !message || !email.value.trim() || !message.value.trim()) {
            toast(C.notices.contactIncomplete, 'error');
            return;
        }
        toast(C.notices.contactSent, 'info');
        email.value = '';
        message.value = '';
        window.scrollTo({ top: 0, behavior: 'smooth' });
    });

    // ---- scroll spy and reveal ----
    var sections = doc.querySelectorAll('[data-section]');
    function reveal(el) { el.classList.add('is-visible'); }
    function markActive(id) {
        doc.querySelectorAll('.nav-list a').forEach(function (a) {
            a.classList.toggle('active', a.getAttribute('href') === '#' + id);
        });
    }
    if ('IntersectionObserver' in window) {
        var observer = new IntersectionObserver(function (entries) {
            entries.forEach(function (entry) {
                if (!entry.isIntersecting) return;
                if (entry.intersectionRatio >= C.revealThreshold) reveal(entry.target);
                if (entry.intersectionRatio >= C.spyThreshold) markActive(entry.target.id);
            });
        }, { threshold: [C.revealThreshold, C.spyThreshold] });
        sections.forEach(function (s) { observer.observe(s); });
    } else {
        sections.forEach(reveal);
    }

    // ---- profile photo ----
    var photo = doc.querySelector('.profile-photo');
    function photoFailed() {
        if (!photo || !photo.parentNode) return;
        var notice = doc.createElement('p');
        notice.className = 'inline-notice';
        notice.setAttribute('role', 'alert');
        notice.textContent = C.notices.photoFailed;
        photo.parentNode.replaceChild(notice, photo);
        photo = null;
        doc.querySelectorAll('.profile .open-lightbox').forEach(function (b) { b.disabled = true; });
    }
    if (photo) {
        photo.addEventListener('error', photoFailed);
        if (photo.complete && photo.naturalWidth === 0) photoFailed();
    }
    var preload = doc.querySelector('img.preload');
    var download = doc.querySelector('a.download');
    function upgrade() { if (download && preload) download.setAttribute('href', preload.getAttribute('src')); }
    if (preload) {
        if (preload.complete && preload.naturalWidth > 0) upgrade();
        else preload.addEventListener('load', upgrade);
    }
})();
"#;

fn js_list(items: impl Iterator<Item = &'static str>) -> String {
    items.map(|item| format!("'{item}'")).collect::<Vec<_>>().join(",")
}

fn apply_call(binding: &PreferenceBinding) -> String {
    let pref = binding.preference;
    let pressed = binding
        .pressed_control
        .map(|id| format!("'{id}'"))
        .unwrap_or_else(|| "null".to_string());
    format!(
        "portfolioMark('{}','{}',portfolioPref('{}',{},[{}]),'{}',{});\n",
        binding.target.css(),
        binding.marker,
        pref.json_key(),
        PreferenceRecord::default().get(pref),
        js_list(binding.legacy_keys.iter().copied()),
        binding.control_id,
        pressed,
    )
}

/// `<head>` script: defines the helpers and applies root-level markers
pub fn prefs_head_script() -> String {
    let fields = js_list(BINDINGS.iter().map(|b| b.preference.json_key()));
    let mut script = PREFS_JS
        .replace("__PREF_KEY__", PREF_KEY)
        .replace("__FIELDS__", &fields);
    for binding in BINDINGS.iter().filter(|b| b.target == Selector::Root) {
        script.push_str(&apply_call(binding));
    }
    script
}

/// End-of-body script: applies every binding to the rendered elements
pub fn prefs_body_script() -> String {
    BINDINGS.iter().map(apply_call).collect()
}

/// Values the page script reads from `PORTFOLIO`
pub fn page_config() -> Value {
    let defaults = PreferenceRecord::default();
    let mut default_values = serde_json::Map::new();
    let mut notices = serde_json::Map::new();
    let bindings: Vec<Value> = BINDINGS
        .iter()
        .map(|b| {
            let pref = b.preference;
            default_values.insert(pref.json_key().to_string(), json!(defaults.get(pref)));
            notices.insert(
                pref.json_key().to_string(),
                json!({
                    "on": Notice::preference_changed(pref, true).text,
                    "off": Notice::preference_changed(pref, false).text,
                }),
            );
            json!({
                "field": pref.json_key(),
                "control": b.control_id,
                "pressed": b.pressed_control,
                "target": b.target.css(),
                "marker": b.marker,
                "legacy": b.legacy_keys,
            })
        })
        .collect();
    notices.insert("reset".into(), json!(Notice::preferences_reset().text));
    notices.insert("contactIncomplete".into(), json!(Notice::contact_incomplete().text));
    notices.insert("contactSent".into(), json!(Notice::contact_sent().text));
    notices.insert("photoFailed".into(), json!(PHOTO_FAILED));

    json!({
        "key": PREF_KEY,
        "defaults": default_values,
        "bindings": bindings,
        "notices": notices,
        "toneClass": {
            "info": NoticeTone::Info.css_class(),
            "error": NoticeTone::Error.css_class(),
        },
        "noticeMs": DEFAULT_NOTICE_MS,
        "revealThreshold": REVEAL_THRESHOLD,
        "spyThreshold": SCROLLSPY_THRESHOLD,
        "navBreakpoint": NAV_BREAKPOINT_PX,
        "scrollMargin": SCROLL_MARGIN_PX,
    })
}

/// Interaction wiring for the served page
pub fn page_script() -> String {
    // `</` would end the surrounding <script> element early
    let config = page_config().to_string().replace("</", "<\\/");
    format!("var PORTFOLIO = {config};\n{PAGE_JS}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn head_script_reads_the_current_slot() {
        let script = prefs_head_script();
        assert!(script.contains(&format!("localStorage.getItem('{PREF_KEY}')")));
        assert!(script.contains("var fields = ['dark','avatarRound'];"));
        assert!(script.contains("classList.add('js')"));
        assert!(!script.contains("__"));
    }

    #[test]
    fn head_script_only_marks_the_root() {
        let script = prefs_head_script();
        assert!(script.contains(
            "portfolioMark(':root','dark',portfolioPref('dark',false,[]),'pref-dark','theme-toggle');"
        ));
        assert!(!script.contains("portfolioMark('.profile-photo'"));
    }

    #[test]
    fn legacy_flags_are_trimmed_like_the_store() {
        let script = prefs_head_script();
        let trim = script.find("flag = flag.trim()").expect("legacy flag trimmed");
        let compare = script.find("flag === '1'").expect("legacy flag compared");
        assert!(trim < compare);
    }

    #[test]
    fn body_script_covers_every_binding() {
        let script = prefs_body_script();
        assert!(script.contains(
            "portfolioMark('.profile-photo','round',portfolioPref('avatarRound',true,['photoRound','profileRound']),'pref-avatar-round',null);"
        ));
        assert_eq!(script.lines().count(), BINDINGS.len());
    }

    #[test]
    fn page_config_mirrors_bindings_and_notices() {
        let config = page_config();
        assert_eq!(config["key"], PREF_KEY);
        assert_eq!(config["defaults"], json!({"dark": false, "avatarRound": true}));
        assert_eq!(config["bindings"].as_array().map(Vec::len), Some(BINDINGS.len()));

        let dark = &config["bindings"][0];
        assert_eq!(dark["field"], "dark");
        assert_eq!(dark["control"], "pref-dark");
        assert_eq!(dark["pressed"], "theme-toggle");
        assert_eq!(dark["target"], ":root");
        let avatar = &config["bindings"][1];
        assert_eq!(avatar["pressed"], Value::Null);
        assert_eq!(avatar["legacy"], json!(["photoRound", "profileRound"]));

        assert_eq!(config["notices"]["dark"]["on"], "Mode sombre activé");
        assert_eq!(config["notices"]["avatarRound"]["off"], "Avatar carré activé");
        assert_eq!(config["notices"]["contactSent"], "Message envoyé — merci !");
        assert_eq!(config["toneClass"]["error"], "toast toast-error");
        assert_eq!(config["noticeMs"], 2600);
        assert_eq!(config["spyThreshold"], 0.28);
        assert_eq!(config["revealThreshold"], 0.12);
    }

    #[test]
    fn page_script_persists_and_wires_every_control() {
        let script = page_script();
        assert!(script.starts_with("var PORTFOLIO = {"));
        for needle in [
            "localStorage.setItem(C.key",
            "addEventListener('change'",
            "on('pref-reset', 'click'",
            "on('open-settings', 'click'",
            "on('close-settings', 'click'",
            "addEventListener('keydown'",
            "addEventListener('resize'",
            "addEventListener('submit'",
            "new IntersectionObserver",
            "[data-lightbox-src]",
            "preload.addEventListener('load'",
        ] {
            assert!(script.contains(needle), "missing {needle}");
        }
    }

    #[test]
    fn page_script_cannot_close_its_script_tag() {
        assert!(!page_script().contains("</"));
    }
}
