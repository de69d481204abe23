//! Path matching over the route table.
//!
//! Patterns support these segment kinds:
//! - static text: `category`
//! - a parameter: `:conferenceId`
//! - an optional parameter: `:searchword?`, matching zero or one segment
//! - a catch-all: `:pathMatch(.*)*` (zero or more remaining segments) or
//!   `:pathMatch(.*)+` (one or more)
//!
//! Child routes are flattened ahead of their parent, so `/category/sports`
//! resolves to the `sports` child while `/category` still resolves to the
//! parent. The first route in table order that matches wins.

use std::collections::HashMap;

use super::table::RouteDescriptor;
use crate::views::ViewKind;

const MAX_REDIRECTS: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Static(String),
    Param(String),
    /// `:name?`, zero or one segment.
    Optional(String),
    /// `:name(.*)*` (zero or more segments) or `:name(.*)+` (one or more).
    CatchAll { name: String, at_least_one: bool },
}

impl Segment {
    fn parse_param(param: &str) -> Self {
        if let Some(name) = param.strip_suffix("(.*)*") {
            return Segment::CatchAll {
                name: name.to_string(),
                at_least_one: false,
            };
        }
        if let Some(name) = param.strip_suffix("(.*)+") {
            return Segment::CatchAll {
                name: name.to_string(),
                at_least_one: true,
            };
        }
        let (param, optional) = match param.strip_suffix('?') {
            Some(name) => (name, true),
            None => (param, false),
        };
        let name = match param.find('(') {
            Some(pos) => {
                log::warn!(
                    "unsupported param pattern ':{}', matching any single segment",
                    param
                );
                &param[..pos]
            }
            None => param,
        };
        if optional {
            Segment::Optional(name.to_string())
        } else {
            Segment::Param(name.to_string())
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPattern {
    segments: Vec<Segment>,
}

impl PathPattern {
    pub fn parse(pattern: &str) -> Self {
        let segments = split_path(pattern)
            .map(|seg| match seg.strip_prefix(':') {
                Some(param) => Segment::parse_param(param),
                None => Segment::Static(seg.to_string()),
            })
            .collect();
        Self { segments }
    }

    /// Match already-decoded path segments, returning captured params.
    pub fn matches(&self, path: &[String]) -> Option<HashMap<String, String>> {
        let mut params = HashMap::new();
        match_segments(&self.segments, path, &mut params).then_some(params)
    }
}

/// Params are recorded only along the branch that matches, so a failed
/// optional attempt leaves nothing behind.
fn match_segments(
    pattern: &[Segment],
    path: &[String],
    params: &mut HashMap<String, String>,
) -> bool {
    let Some((segment, rest)) = pattern.split_first() else {
        return path.is_empty();
    };

    match segment {
        Segment::Static(text) => match path.split_first() {
            Some((first, tail)) if first == text => match_segments(rest, tail, params),
            _ => false,
        },
        Segment::Param(name) => match path.split_first() {
            Some((first, tail)) if match_segments(rest, tail, params) => {
                params.insert(name.clone(), first.clone());
                true
            }
            _ => false,
        },
        Segment::Optional(name) => {
            if let Some((first, tail)) = path.split_first() {
                if match_segments(rest, tail, params) {
                    params.insert(name.clone(), first.clone());
                    return true;
                }
            }
            match_segments(rest, path, params)
        }
        Segment::CatchAll { name, at_least_one } => {
            if *at_least_one && path.is_empty() {
                return false;
            }
            if !match_segments(rest, &[], params) {
                return false;
            }
            params.insert(name.clone(), path.join("/"));
            true
        }
    }
}

/// A navigation target after matching.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedRoute {
    pub name: Option<String>,
    /// Path that was matched, after any redirect.
    pub path: String,
    /// Views to render, outermost first. Empty for passthrough routes.
    pub views: Vec<ViewKind>,
    pub params: HashMap<String, String>,
    pub query: HashMap<String, String>,
    /// Query string exactly as it appeared in the URL, without the `?`.
    pub raw_query: String,
    /// Original path when a redirect was followed.
    pub redirected_from: Option<String>,
}

impl ResolvedRoute {
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    pub fn query(&self, key: &str) -> Option<&str> {
        self.query.get(key).map(String::as_str)
    }

    /// Path plus query string, as it should appear in the address bar.
    pub fn full_path(&self) -> String {
        if self.raw_query.is_empty() {
            return self.path.clone();
        }
        format!("{}?{}", self.path, self.raw_query)
    }
}

#[derive(Debug, Clone)]
struct CompiledRoute {
    full_path: String,
    pattern: PathPattern,
    name: Option<String>,
    views: Vec<ViewKind>,
    redirect: Option<String>,
}

#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<CompiledRoute>,
}

impl RouteTable {
    pub fn new(routes: &[RouteDescriptor]) -> Self {
        let mut compiled = Vec::new();
        for route in routes {
            compile(route, "", &[], &mut compiled);
        }
        Self { routes: compiled }
    }

    /// Full path pattern of a named route, e.g. `"/category/sports"`.
    pub fn path_of(&self, name: &str) -> Option<&str> {
        self.routes
            .iter()
            .find(|r| r.name.as_deref() == Some(name))
            .map(|r| r.full_path.as_str())
    }

    /// Resolve a URL (path plus optional query and fragment).
    ///
    /// Redirects are followed. Returns `None` when nothing matches or the
    /// redirect chain does not settle.
    pub fn resolve(&self, url: &str) -> Option<ResolvedRoute> {
        let url = url.split('#').next().unwrap_or_default();
        let (path, query) = match url.split_once('?') {
            Some((path, query)) => (path, query),
            None => (url, ""),
        };
        let raw_query = query.to_string();
        let query = parse_query(query);

        let mut current = path.to_string();
        let mut redirected_from = None;
        for _ in 0..=MAX_REDIRECTS {
            let segments = decode_segments(&current);
            let (route, params) = self
                .routes
                .iter()
                .find_map(|r| r.pattern.matches(&segments).map(|p| (r, p)))?;

            match &route.redirect {
                Some(target) => {
                    redirected_from.get_or_insert_with(|| path.to_string());
                    current = target.clone();
                }
                None => {
                    return Some(ResolvedRoute {
                        name: route.name.clone(),
                        path: current,
                        views: route.views.clone(),
                        params,
                        query,
                        raw_query,
                        redirected_from,
                    });
                }
            }
        }

        log::warn!("redirect loop while resolving '{}'", path);
        None
    }
}

fn compile(
    route: &RouteDescriptor,
    parent_path: &str,
    parent_views: &[ViewKind],
    out: &mut Vec<CompiledRoute>,
) {
    let full_path = join_path(parent_path, &route.path);
    let mut views = parent_views.to_vec();
    views.extend(route.view);

    for child in &route.children {
        compile(child, &full_path, &views, out);
    }

    out.push(CompiledRoute {
        pattern: PathPattern::parse(&full_path),
        full_path,
        name: route.name.clone(),
        views,
        redirect: route.redirect.clone(),
    });
}

fn join_path(parent: &str, path: &str) -> String {
    if path.starts_with('/') || parent.is_empty() {
        return path.to_string();
    }
    format!("{}/{}", parent.trim_end_matches('/'), path)
}

fn split_path(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

/// Flat `key=value` query map. Queries `serde_qs` cannot flatten (repeated
/// keys, nested `a[b]` keys) are read pair by pair, first value wins.
fn parse_query(query: &str) -> HashMap<String, String> {
    if query.is_empty() {
        return HashMap::new();
    }
    match serde_qs::from_str::<HashMap<String, String>>(query) {
        Ok(map) => map,
        Err(e) => {
            log::debug!("query '{}' is not flat ({}), reading pairs", query, e);
            let mut map = HashMap::new();
            for pair in query.split('&').filter(|p| !p.is_empty()) {
                let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
                map.entry(decode_component(key))
                    .or_insert_with(|| decode_component(value));
            }
            map
        }
    }
}

fn decode_component(raw: &str) -> String {
    let raw = raw.replace('+', " ");
    urlencoding::decode(&raw)
        .map(|decoded| decoded.into_owned())
        .unwrap_or_else(|_| raw.clone())
}

fn decode_segments(path: &str) -> Vec<String> {
    split_path(path)
        .map(|seg| {
            urlencoding::decode(seg)
                .map(|s| s.into_owned())
                .unwrap_or_else(|_| seg.to_string())
        })
        .collect()
}
