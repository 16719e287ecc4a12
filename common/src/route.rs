//! ルーティング
//!
//! パス文字列とビューの対応表、および現在のビューを管理するNavigator。
//! ブラウザ履歴の操作はWeb側で行い、ここでは状態遷移だけを扱う。

use serde::{Deserialize, Serialize};

/// 表示可能な画面
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum View {
    Home,
    Analysis,
    Team,
}

impl View {
    pub fn as_str(&self) -> &'static str {
        match self {
            View::Home => "home",
            View::Analysis => "analysis",
            View::Team => "team",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub path: &'static str,
    pub view: View,
}

pub const ROUTES: [Route; 3] = [
    Route { path: "/home", view: View::Home },
    Route { path: "/prediction", view: View::Analysis },
    Route { path: "/team", view: View::Team },
];

pub const DEFAULT_ROUTE: Route = ROUTES[0];

/// ナビゲーションバーのリンク
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub path: &'static str,
}

pub const NAV_LINKS: [NavLink; 3] = [
    NavLink { label: "Home", path: "/home" },
    NavLink { label: "Prediction", path: "/prediction" },
    NavLink { label: "Team", path: "/team" },
];

/// 既知のパスのみ返す
pub fn lookup(path: &str) -> Option<Route> {
    ROUTES.iter().copied().find(|r| r.path == path)
}

/// 未知のパスはデフォルト（home）に解決する
pub fn resolve(path: &str) -> Route {
    lookup(path).unwrap_or(DEFAULT_ROUTE)
}

/// 現在のロケーションとビューを保持する
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    location: String,
    view: View,
}

impl Navigator {
    /// 初期ロケーションから生成（初回のhandle_route相当）
    pub fn new(initial_location: &str) -> Self {
        let mut navigator = Self {
            location: String::new(),
            view: DEFAULT_ROUTE.view,
        };
        navigator.handle_route(initial_location);
        navigator
    }

    /// クライアント側の画面遷移
    ///
    /// 既知のパスならロケーションとビューを更新して `Some` を返す。
    /// 呼び出し側はそのパスを履歴に積む。未知のパスは何もしない。
    pub fn navigate(&mut self, path: &str) -> Option<Route> {
        let route = lookup(path)?;
        self.handle_route(route.path);
        Some(route)
    }

    /// ロケーションを読み取りビューを決定する（初回表示・戻る/進む）
    pub fn handle_route(&mut self, location: &str) -> View {
        let route = resolve(location);
        self.location = location.to_string();
        self.view = route.view;
        log::debug!("route {} -> {}", location, route.view.as_str());
        self.view
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    /// リンクのパスが現在のロケーションと一致するか
    pub fn is_active(&self, link_path: &str) -> bool {
        self.location == link_path
    }

    pub fn active_link(&self) -> Option<NavLink> {
        NAV_LINKS.iter().copied().find(|l| self.is_active(l.path))
    }
}
