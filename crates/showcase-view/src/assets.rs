//! Inline stylesheet and script shared by every page.
//!
//! The script only drives cosmetic timers and toggles. All timing values
//! come from `data-*` attributes written by the renderer.

pub const STYLESHEET: &str = r#"
:root { --primary: #6366f1; --gold: #f59e0b; --silver: #94a3b8; --bronze: #b45309; --bg: #0f172a; --card: #1e293b; --text: #e2e8f0; --muted: #94a3b8; }
* { box-sizing: border-box; margin: 0; padding: 0; }
body { font-family: system-ui, sans-serif; background: var(--bg); color: var(--text); line-height: 1.5; }
.header { display: flex; align-items: center; justify-content: space-between; padding: 1rem 2rem; background: var(--card); }
.logo { font-weight: 700; font-size: 1.25rem; }
.nav-menu { display: flex; gap: .5rem; }
.nav-btn { padding: .5rem 1rem; border-radius: .5rem; color: var(--muted); text-decoration: none; }
.nav-btn.active { background: var(--primary); color: #fff; }
.mobile-menu-btn { display: none; background: none; border: 0; color: var(--text); font-size: 1.25rem; }
.header-stats { display: flex; gap: .5rem; }
.stat-badge { background: rgba(99,102,241,.15); padding: .25rem .75rem; border-radius: 999px; font-size: .85rem; }
.page { max-width: 1200px; margin: 0 auto; padding: 2rem; }
.projects-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(300px, 1fr)); gap: 1.5rem; }
.project-card { background: var(--card); border-radius: 1rem; padding: 1.5rem; display: flex; flex-direction: column; gap: 1rem; animation: rise .6s ease both; }
.project-header { display: flex; justify-content: space-between; gap: 1rem; }
.vote-count { color: #f472b6; display: flex; gap: .25rem; align-items: center; }
.project-description { color: var(--muted); flex: 1; }
.project-meta, .project-footer { display: flex; justify-content: space-between; align-items: center; }
.project-author { display: flex; align-items: center; gap: .5rem; }
.author-avatar { width: 2rem; height: 2rem; border-radius: 50%; background: var(--primary); display: grid; place-items: center; }
.project-link { color: var(--primary); text-decoration: none; display: flex; gap: .25rem; align-items: center; }
.vote-form { display: contents; }
.vote-btn, .btn { border: 0; border-radius: .5rem; padding: .75rem; font-weight: 600; cursor: pointer; display: flex; gap: .5rem; justify-content: center; align-items: center; width: 100%; }
.vote-btn.primary, .btn.primary { background: var(--primary); color: #fff; }
.vote-btn.voted { background: #14532d; color: #bbf7d0; cursor: default; }
.vote-btn.loading { opacity: .7; }
.empty-state { text-align: center; padding: 4rem 1rem; color: var(--muted); }
.upload-form { background: var(--card); border-radius: 1rem; padding: 2rem; display: flex; flex-direction: column; gap: 1.25rem; max-width: 640px; margin: 0 auto; }
.form-group { display: flex; flex-direction: column; gap: .5rem; }
.form-group input, .form-group textarea { padding: .75rem; border-radius: .5rem; border: 1px solid #334155; background: var(--bg); color: var(--text); }
.form-group .invalid { border-color: #ef4444; }
.stats-grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 1rem; margin-bottom: 2rem; }
.stat-card { background: var(--card); border-radius: 1rem; padding: 1.25rem; text-align: center; }
.stat-value { font-size: 1.5rem; font-weight: 700; }
.stat-label { color: var(--muted); font-size: .85rem; }
.leaderboard { display: flex; flex-direction: column; gap: 1rem; }
.leaderboard-item { background: var(--card); border-radius: 1rem; padding: 1.25rem; border-left: 4px solid transparent; animation: rise .6s ease both; }
.leaderboard-item.rank-1 { border-color: var(--gold); }
.leaderboard-item.rank-2 { border-color: var(--silver); }
.leaderboard-item.rank-3 { border-color: var(--bronze); }
.leaderboard-content { display: flex; gap: 1.25rem; align-items: center; }
.rank-icon { width: 3rem; height: 3rem; border-radius: 50%; display: grid; place-items: center; font-weight: 700; background: #334155; }
.rank-icon.rank-1 { background: var(--gold); }
.rank-icon.rank-2 { background: var(--silver); }
.rank-icon.rank-3 { background: var(--bronze); }
.project-info { flex: 1; }
.vote-section { min-width: 140px; text-align: right; }
.vote-number { font-size: 1.75rem; font-weight: 700; }
.progress-bar-container { height: .5rem; background: #334155; border-radius: 999px; overflow: hidden; }
.progress-bar-fill { height: 100%; background: var(--primary); transition: width 1s ease; }
.toast-container { position: fixed; top: 1rem; right: 1rem; display: flex; flex-direction: column; gap: .5rem; z-index: 50; }
.toast { display: flex; gap: .75rem; align-items: center; padding: .75rem 1rem; border-radius: .5rem; background: var(--card); }
.toast.success { border-left: 4px solid #22c55e; }
.toast.error { border-left: 4px solid #ef4444; }
.toast-close { background: none; border: 0; color: var(--muted); cursor: pointer; }
.modal, .loading-overlay { position: fixed; inset: 0; display: none; place-items: center; background: rgba(0,0,0,.6); z-index: 60; }
.modal.show, .loading-overlay.show { display: grid; }
.modal-content { background: var(--card); padding: 2rem; border-radius: 1rem; text-align: center; max-width: 400px; }
.modal-icon { font-size: 3rem; color: #22c55e; }
@keyframes rise { from { opacity: 0; transform: translateY(20px); } to { opacity: 1; transform: none; } }
@media (max-width: 768px) {
  .mobile-menu-btn { display: block; }
  .nav-menu { display: none; position: absolute; top: 4rem; left: 0; right: 0; flex-direction: column; background: var(--card); padding: 1rem; }
  .nav-menu.show { display: flex; }
  .stats-grid { grid-template-columns: 1fr; }
  .leaderboard-content { flex-direction: column; align-items: flex-start; }
}
"#;

pub const SCRIPT: &str = r#"
(function () {
  function ms(el, name, fallback) {
    var v = parseInt(el.getAttribute(name), 10);
    return isNaN(v) ? fallback : v;
  }

  document.querySelectorAll('.toast').forEach(function (toast) {
    var close = toast.querySelector('.toast-close');
    if (close) close.addEventListener('click', function () { toast.remove(); });
    setTimeout(function () { if (toast.parentElement) toast.remove(); }, ms(toast, 'data-dismiss-after', 3000));
  });

  var modal = document.getElementById('successModal');
  if (modal && modal.classList.contains('show')) {
    setTimeout(function () {
      modal.classList.remove('show');
      window.location.assign(modal.getAttribute('data-return-to') || '/');
    }, ms(modal, 'data-dismiss-after', 2000));
  }

  var board = document.getElementById('leaderboard');
  if (board) {
    var tick = ms(board, 'data-counter-tick', 50);
    board.querySelectorAll('.vote-number').forEach(function (counter) {
      var target = ms(counter, 'data-target', 0);
      var step = ms(counter, 'data-step', 1);
      var current = 0;
      setTimeout(function () {
        var timer = setInterval(function () {
          current += step;
          if (current >= target) { current = target; clearInterval(timer); }
          counter.textContent = current;
        }, tick);
      }, ms(counter, 'data-start', 300));
    });
  }

  var menuBtn = document.getElementById('mobileMenuBtn');
  var menu = document.getElementById('navMenu');
  if (menuBtn && menu) {
    menuBtn.addEventListener('click', function () { menu.classList.toggle('show'); });
    document.addEventListener('click', function (e) {
      if (!menu.contains(e.target) && !menuBtn.contains(e.target)) menu.classList.remove('show');
    });
    window.addEventListener('resize', function () {
      if (window.innerWidth > 768) menu.classList.remove('show');
    });
  }

  document.querySelectorAll('form').forEach(function (form) {
    form.addEventListener('submit', function () {
      var btn = form.querySelector('[data-loading-label]');
      if (!btn) return;
      btn.classList.add('loading');
      btn.disabled = true;
      btn.innerHTML = '<i class="fas fa-spinner fa-spin"></i> <span>' + btn.getAttribute('data-loading-label') + '</span>';
    });
  });
})();
"#;
