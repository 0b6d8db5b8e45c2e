pub fn dashboard_page() -> String {
    shell(DASHBOARD_HTML)
}

pub fn friends_page() -> String {
    shell(FRIENDS_HTML)
}

pub fn add_friend_page() -> String {
    shell(ADD_FRIEND_HTML)
}

pub fn edit_friend_page(id: i64) -> String {
    shell(EDIT_FRIEND_HTML).replace("{{ID}}", &id.to_string())
}

fn shell(page: &str) -> String {
    page.replace("{{STYLE}}", STYLE).replace("{{NAV}}", NAV)
}

const NAV: &str = r#"<nav>
  <span class="brand">Birthday Book</span>
  <a href="/">Dashboard</a>
  <a href="/friends">Friends</a>
  <a href="/friends/add" class="nav-add">Add Friend</a>
</nav>"#;

const STYLE: &str = r#"
    :root {
      --bg: #f6f7fb;
      --ink: #1f2430;
      --muted: #6b7280;
      --accent: #4f46e5;
      --accent-soft: #eef2ff;
      --ok: #15803d;
      --ok-soft: #dcfce7;
      --danger: #b91c1c;
      --card: #ffffff;
      --border: #e5e7eb;
      --shadow: 0 10px 30px rgba(31, 36, 48, 0.08);
    }

    * { box-sizing: border-box; }

    body {
      margin: 0;
      min-height: 100vh;
      background: var(--bg);
      color: var(--ink);
      font-family: "Segoe UI", "Helvetica Neue", Arial, sans-serif;
    }

    nav {
      display: flex;
      align-items: center;
      gap: 18px;
      padding: 14px 28px;
      background: var(--card);
      border-bottom: 1px solid var(--border);
    }

    nav .brand {
      font-weight: 700;
      font-size: 1.1rem;
      margin-right: 10px;
    }

    nav a {
      color: var(--muted);
      text-decoration: none;
      font-size: 0.95rem;
    }

    nav a:hover { color: var(--accent); }

    nav .nav-add {
      margin-left: auto;
      background: var(--accent);
      color: white;
      padding: 8px 14px;
      border-radius: 8px;
    }

    main {
      width: min(960px, 100%);
      margin: 0 auto;
      padding: 28px 18px 48px;
    }

    h1 { margin: 0 0 20px; font-size: 1.8rem; }

    .stat-row {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
      gap: 16px;
      margin-bottom: 28px;
    }

    .stat {
      background: var(--card);
      border: 1px solid var(--border);
      border-radius: 12px;
      padding: 18px;
      box-shadow: var(--shadow);
    }

    .stat .label {
      display: block;
      font-size: 0.8rem;
      text-transform: uppercase;
      letter-spacing: 0.08em;
      color: var(--muted);
    }

    .stat .value {
      display: block;
      margin-top: 6px;
      font-size: 2rem;
      font-weight: 600;
      color: var(--accent);
    }

    .panel {
      background: var(--card);
      border: 1px solid var(--border);
      border-radius: 12px;
      box-shadow: var(--shadow);
      overflow: hidden;
    }

    .panel h2 {
      margin: 0;
      padding: 16px 20px;
      font-size: 1.1rem;
      border-bottom: 1px solid var(--border);
    }

    ul.upcoming { list-style: none; margin: 0; padding: 0; }

    ul.upcoming li {
      display: flex;
      align-items: center;
      justify-content: space-between;
      padding: 14px 20px;
      border-bottom: 1px solid var(--border);
    }

    ul.upcoming li:last-child { border-bottom: none; }

    .who .name { font-weight: 600; color: var(--accent); }
    .who .when { font-size: 0.9rem; color: var(--muted); margin-top: 2px; }

    .badge {
      display: inline-block;
      padding: 3px 10px;
      border-radius: 999px;
      font-size: 0.8rem;
      font-weight: 600;
      background: var(--accent-soft);
      color: var(--accent);
    }

    .badge.today { background: var(--ok-soft); color: var(--ok); }

    .turning {
      display: block;
      text-align: right;
      font-size: 0.8rem;
      color: var(--muted);
      margin-top: 4px;
    }

    .empty { padding: 24px 20px; color: var(--muted); text-align: center; }

    .search {
      width: 100%;
      padding: 12px 14px;
      margin-bottom: 20px;
      border: 1px solid var(--border);
      border-radius: 10px;
      font-size: 1rem;
    }

    .grid {
      display: grid;
      grid-template-columns: repeat(auto-fill, minmax(260px, 1fr));
      gap: 16px;
    }

    .card {
      background: var(--card);
      border: 1px solid var(--border);
      border-radius: 12px;
      padding: 16px;
      box-shadow: var(--shadow);
      display: grid;
      gap: 6px;
    }

    .card .name { font-weight: 600; font-size: 1.05rem; }
    .card .meta { font-size: 0.9rem; color: var(--muted); }

    .card .actions {
      display: flex;
      gap: 12px;
      margin-top: 8px;
      font-size: 0.9rem;
    }

    .card .actions a { color: var(--accent); text-decoration: none; }

    .card .actions button {
      background: none;
      border: none;
      padding: 0;
      color: var(--danger);
      cursor: pointer;
      font-size: 0.9rem;
    }

    form.friend-form {
      background: var(--card);
      border: 1px solid var(--border);
      border-radius: 12px;
      padding: 24px;
      box-shadow: var(--shadow);
      display: grid;
      gap: 16px;
      max-width: 640px;
    }

    form.friend-form label {
      display: block;
      font-size: 0.9rem;
      font-weight: 600;
      margin-bottom: 4px;
    }

    form.friend-form input,
    form.friend-form select,
    form.friend-form textarea {
      width: 100%;
      padding: 9px 11px;
      border: 1px solid var(--border);
      border-radius: 8px;
      font-size: 0.95rem;
      font-family: inherit;
    }

    .field-row {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(140px, 1fr));
      gap: 16px;
    }

    .field-error { color: var(--danger); font-size: 0.85rem; margin-top: 4px; min-height: 1em; }

    .form-status { color: var(--danger); font-size: 0.9rem; min-height: 1.2em; }

    .form-actions { display: flex; justify-content: flex-end; gap: 12px; }

    .form-actions a {
      padding: 10px 16px;
      color: var(--muted);
      text-decoration: none;
    }

    .form-actions button {
      background: var(--accent);
      color: white;
      border: none;
      border-radius: 8px;
      padding: 10px 18px;
      font-size: 0.95rem;
      font-weight: 600;
      cursor: pointer;
    }

    .form-actions button:disabled { opacity: 0.5; }
"#;

const DASHBOARD_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Birthday Book</title>
  <style>{{STYLE}}</style>
</head>
<body>
  {{NAV}}
  <main>
    <h1>Dashboard</h1>

    <section class="stat-row">
      <div class="stat">
        <span class="label">Total Friends</span>
        <span id="total-friends" class="value">0</span>
      </div>
      <div class="stat">
        <span class="label">Upcoming Birthdays (30 Days)</span>
        <span id="upcoming-count" class="value">0</span>
      </div>
    </section>

    <section class="panel">
      <h2>Upcoming Birthdays</h2>
      <ul id="upcoming" class="upcoming">
        <li class="empty">Loading...</li>
      </ul>
    </section>
  </main>

  <script>
    const listEl = document.getElementById('upcoming');

    const formatDate = (iso) =>
      new Date(iso + 'T00:00:00').toLocaleDateString(undefined, {
        weekday: 'long',
        year: 'numeric',
        month: 'long',
        day: 'numeric',
      });

    const renderUpcoming = (friends) => {
      listEl.innerHTML = '';
      if (friends.length === 0) {
        const li = document.createElement('li');
        li.className = 'empty';
        li.textContent = 'No upcoming birthdays in the next 30 days.';
        listEl.appendChild(li);
        return;
      }

      for (const friend of friends) {
        const li = document.createElement('li');

        const who = document.createElement('div');
        who.className = 'who';
        const name = document.createElement('div');
        name.className = 'name';
        name.textContent = friend.fullName;
        const when = document.createElement('div');
        when.className = 'when';
        when.textContent = formatDate(friend.nextBirthday);
        who.append(name, when);

        const side = document.createElement('div');
        const badge = document.createElement('span');
        badge.className = friend.daysUntil === 0 ? 'badge today' : 'badge';
        badge.textContent =
          friend.daysUntil === 0 ? 'Today!' : `In ${friend.daysUntil} days`;
        side.appendChild(badge);
        if (friend.age != null) {
          const turning = document.createElement('span');
          turning.className = 'turning';
          turning.textContent = `Turning ${friend.age}`;
          side.appendChild(turning);
        }

        li.append(who, side);
        listEl.appendChild(li);
      }
    };

    fetch('/api/dashboard')
      .then((res) => {
        if (!res.ok) throw new Error('Unable to load dashboard');
        return res.json();
      })
      .then((data) => {
        document.getElementById('total-friends').textContent = data.stats.totalFriends;
        document.getElementById('upcoming-count').textContent = data.stats.upcomingBirthdaysCount;
        renderUpcoming(data.upcomingBirthdays);
      })
      .catch((err) => {
        listEl.innerHTML = `<li class="empty">${err.message}</li>`;
      });
  </script>
</body>
</html>
"#;

const FRIENDS_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>All Friends - Birthday Book</title>
  <style>{{STYLE}}</style>
</head>
<body>
  {{NAV}}
  <main>
    <h1>All Friends</h1>
    <input id="search" class="search" type="text" placeholder="Search friends..." />
    <div id="grid" class="grid"></div>
    <div id="empty" class="empty" hidden>No friends found.</div>
  </main>

  <script>
    const gridEl = document.getElementById('grid');
    const emptyEl = document.getElementById('empty');
    const searchEl = document.getElementById('search');

    let friends = [];

    const monthName = (m) =>
      new Date(2000, m - 1, 1).toLocaleString('default', { month: 'long' });

    const birthdayLabel = (friend) => {
      const base = `${monthName(friend.birthMonth)} ${friend.birthDay}`;
      return friend.birthYear != null ? `${base}, ${friend.birthYear}` : base;
    };

    const matches = (friend, term) =>
      friend.fullName.toLowerCase().includes(term) ||
      (friend.country || '').toLowerCase().includes(term);

    const render = () => {
      const term = searchEl.value.trim().toLowerCase();
      const visible = friends.filter((f) => matches(f, term));
      gridEl.innerHTML = '';
      emptyEl.hidden = visible.length > 0;

      for (const friend of visible) {
        const card = document.createElement('div');
        card.className = 'card';

        const name = document.createElement('div');
        name.className = 'name';
        name.textContent = friend.fullName;
        card.appendChild(name);

        const birthday = document.createElement('div');
        birthday.className = 'meta';
        birthday.textContent = birthdayLabel(friend);
        card.appendChild(birthday);

        for (const key of ['country', 'email', 'phone']) {
          if (friend[key]) {
            const meta = document.createElement('div');
            meta.className = 'meta';
            meta.textContent = friend[key];
            card.appendChild(meta);
          }
        }

        const actions = document.createElement('div');
        actions.className = 'actions';
        const edit = document.createElement('a');
        edit.href = `/friends/${friend.id}/edit`;
        edit.textContent = 'Edit';
        const del = document.createElement('button');
        del.type = 'button';
        del.textContent = 'Delete';
        del.addEventListener('click', () => removeFriend(friend));
        actions.append(edit, del);
        card.appendChild(actions);

        gridEl.appendChild(card);
      }
    };

    const removeFriend = async (friend) => {
      if (!confirm(`Delete ${friend.fullName}?`)) return;
      const res = await fetch(`/api/friends/${friend.id}`, { method: 'DELETE' });
      if (res.ok) {
        friends = friends.filter((f) => f.id !== friend.id);
        render();
      }
    };

    searchEl.addEventListener('input', render);

    fetch('/api/friends')
      .then((res) => {
        if (!res.ok) throw new Error('Unable to load friends');
        return res.json();
      })
      .then((data) => {
        friends = data;
        render();
      })
      .catch(() => {
        emptyEl.hidden = false;
        emptyEl.textContent = 'Failed to load friends.';
      });
  </script>
</body>
</html>
"#;

const ADD_FRIEND_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Add Friend - Birthday Book</title>
  <style>{{STYLE}}</style>
</head>
<body>
  {{NAV}}
  <main>
    <h1>Add Friend</h1>
    <form id="friend-form" class="friend-form">
      <div>
        <label for="fullName">Full Name</label>
        <input id="fullName" name="fullName" type="text" />
        <div class="field-error" data-field="fullName"></div>
      </div>

      <div class="field-row">
        <div>
          <label for="email">Email</label>
          <input id="email" name="email" type="email" />
          <div class="field-error" data-field="email"></div>
        </div>
        <div>
          <label for="phone">Phone</label>
          <input id="phone" name="phone" type="tel" />
        </div>
      </div>

      <div>
        <label for="country">Country</label>
        <input id="country" name="country" type="text" />
      </div>

      <div class="field-row">
        <div>
          <label for="birthMonth">Month</label>
          <select id="birthMonth" name="birthMonth"></select>
          <div class="field-error" data-field="birthMonth"></div>
        </div>
        <div>
          <label for="birthDay">Day</label>
          <input id="birthDay" name="birthDay" type="number" min="1" max="31" />
          <div class="field-error" data-field="birthDay"></div>
        </div>
        <div>
          <label for="birthYear">Year (Optional)</label>
          <input id="birthYear" name="birthYear" type="number" min="1900" />
        </div>
      </div>

      <div>
        <label for="notes">Notes</label>
        <textarea id="notes" name="notes" rows="3"></textarea>
      </div>

      <div class="form-status" id="form-status"></div>
      <div class="form-actions">
        <a href="/friends">Cancel</a>
        <button type="submit" id="save-btn">Save Friend</button>
      </div>
    </form>
  </main>

  <script>
    const form = document.getElementById('friend-form');
    const statusEl = document.getElementById('form-status');
    const saveBtn = document.getElementById('save-btn');
    const monthSelect = document.getElementById('birthMonth');

    const today = new Date();
    for (let m = 1; m <= 12; m += 1) {
      const option = document.createElement('option');
      option.value = m;
      option.textContent = new Date(2000, m - 1, 1).toLocaleString('default', { month: 'long' });
      monthSelect.appendChild(option);
    }
    monthSelect.value = today.getMonth() + 1;
    document.getElementById('birthDay').value = today.getDate();

    const clearErrors = () => {
      statusEl.textContent = '';
      for (const el of document.querySelectorAll('.field-error')) {
        el.textContent = '';
      }
    };

    const showErrors = (body) => {
      statusEl.textContent = body.error || 'Failed to save friend.';
      for (const detail of body.details || []) {
        const slot = document.querySelector(`.field-error[data-field="${detail.field}"]`);
        if (slot) slot.textContent = detail.message;
      }
    };

    const readForm = () => {
      const value = (id) => document.getElementById(id).value.trim();
      const payload = {
        fullName: value('fullName'),
        country: value('country'),
        phone: value('phone'),
        email: value('email'),
        birthMonth: Number(monthSelect.value),
        birthDay: Number(value('birthDay')),
        notes: value('notes'),
      };
      const year = value('birthYear');
      if (year !== '') payload.birthYear = Number(year);
      return payload;
    };

    form.addEventListener('submit', async (event) => {
      event.preventDefault();
      clearErrors();
      saveBtn.disabled = true;

      try {
        const res = await fetch('/api/friends', {
          method: 'POST',
          headers: { 'content-type': 'application/json' },
          body: JSON.stringify(readForm()),
        });

        if (res.ok) {
          window.location.href = '/friends';
          return;
        }
        showErrors(await res.json().catch(() => ({})));
      } catch (err) {
        statusEl.textContent = 'An error occurred while saving. Please try again.';
      } finally {
        saveBtn.disabled = false;
      }
    });
  </script>
</body>
</html>
"#;

const EDIT_FRIEND_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Edit Friend - Birthday Book</title>
  <style>{{STYLE}}</style>
</head>
<body>
  {{NAV}}
  <main>
    <h1>Edit Friend</h1>
    <form id="friend-form" class="friend-form">
      <div>
        <label for="fullName">Full Name</label>
        <input id="fullName" name="fullName" type="text" />
        <div class="field-error" data-field="fullName"></div>
      </div>

      <div class="field-row">
        <div>
          <label for="email">Email</label>
          <input id="email" name="email" type="email" />
          <div class="field-error" data-field="email"></div>
        </div>
        <div>
          <label for="phone">Phone</label>
          <input id="phone" name="phone" type="tel" />
        </div>
      </div>

      <div>
        <label for="country">Country</label>
        <input id="country" name="country" type="text" />
      </div>

      <div class="field-row">
        <div>
          <label for="birthMonth">Month</label>
          <select id="birthMonth" name="birthMonth"></select>
          <div class="field-error" data-field="birthMonth"></div>
        </div>
        <div>
          <label for="birthDay">Day</label>
          <input id="birthDay" name="birthDay" type="number" min="1" max="31" />
          <div class="field-error" data-field="birthDay"></div>
        </div>
        <div>
          <label for="birthYear">Year (Optional)</label>
          <input id="birthYear" name="birthYear" type="number" min="1900" />
        </div>
      </div>

      <div>
        <label for="notes">Notes</label>
        <textarea id="notes" name="notes" rows="3"></textarea>
      </div>

      <div class="form-status" id="form-status"></div>
      <div class="form-actions">
        <a href="/friends">Cancel</a>
        <button type="submit" id="save-btn">Save Friend</button>
      </div>
    </form>
  </main>

  <script>
    const friendId = {{ID}};
    const form = document.getElementById('friend-form');
    const statusEl = document.getElementById('form-status');
    const saveBtn = document.getElementById('save-btn');
    const monthSelect = document.getElementById('birthMonth');

    for (let m = 1; m <= 12; m += 1) {
      const option = document.createElement('option');
      option.value = m;
      option.textContent = new Date(2000, m - 1, 1).toLocaleString('default', { month: 'long' });
      monthSelect.appendChild(option);
    }

    const clearErrors = () => {
      statusEl.textContent = '';
      for (const el of document.querySelectorAll('.field-error')) {
        el.textContent = '';
      }
    };

    const showErrors = (body) => {
      statusEl.textContent = body.error || 'Failed to save friend.';
      for (const detail of body.details || []) {
        const slot = document.querySelector(`.field-error[data-field="${detail.field}"]`);
        if (slot) slot.textContent = detail.message;
      }
    };

    const fill = (friend) => {
      document.getElementById('fullName').value = friend.fullName || '';
      document.getElementById('email').value = friend.email || '';
      document.getElementById('phone').value = friend.phone || '';
      document.getElementById('country').value = friend.country || '';
      document.getElementById('notes').value = friend.notes || '';
      monthSelect.value = friend.birthMonth;
      document.getElementById('birthDay').value = friend.birthDay;
      if (friend.birthYear != null) {
        document.getElementById('birthYear').value = friend.birthYear;
      }
    };

    const readForm = () => {
      const value = (id) => document.getElementById(id).value.trim();
      const payload = {
        fullName: value('fullName'),
        country: value('country'),
        phone: value('phone'),
        email: value('email'),
        birthMonth: Number(monthSelect.value),
        birthDay: Number(value('birthDay')),
        notes: value('notes'),
      };
      const year = value('birthYear');
      if (year !== '') payload.birthYear = Number(year);
      return payload;
    };

    fetch(`/api/friends/${friendId}`)
      .then((res) => {
        if (!res.ok) throw new Error('Friend not found');
        return res.json();
      })
      .then(fill)
      .catch((err) => {
        statusEl.textContent = err.message;
      });

    form.addEventListener('submit', async (event) => {
      event.preventDefault();
      clearErrors();
      saveBtn.disabled = true;

      try {
        const res = await fetch(`/api/friends/${friendId}`, {
          method: 'PUT',
          headers: { 'content-type': 'application/json' },
          body: JSON.stringify(readForm()),
        });

        if (res.ok) {
          window.location.href = '/friends';
          return;
        }
        showErrors(await res.json().catch(() => ({})));
      } catch (err) {
        statusEl.textContent = 'An error occurred while saving. Please try again.';
      } finally {
        saveBtn.disabled = false;
      }
    });
  </script>
</body>
</html>
"#;
