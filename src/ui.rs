use crate::models::WidgetSnapshot;

pub fn render_index(snapshot: &WidgetSnapshot) -> String {
    INDEX_HTML
        .replace("{{MONTH}}", &snapshot.month)
        .replace("{{SELECTED}}", &snapshot.selected_date.to_string())
        .replace("{{ACHIEVED}}", &snapshot.achieved_this_month.to_string())
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Calendar Todo</title>
  <style>
    :root {
      --main-black-color: #1f1f1f;
      --main-white-color: #ffffff;
      --calendar-sunday-color: #e5484d;
      --calendar-saturday-color: #3e63dd;
      --category-main-color: #d9dce1;
      --category-1-color: #ff8a65;
      --category-2-color: #66bb6a;
      --category-3-color: #42a5f5;
      --category-4-color: #ab47bc;
      --modal-bg-color: #f4f5f7;
      --modal-delete-color: #e5484d;
      --shadow: 0 24px 60px rgba(31, 31, 31, 0.12);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: #f4f5f7;
      color: var(--main-black-color);
      font-family: "Pretendard", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: start center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(420px, 100%);
      background: var(--main-white-color);
      border-radius: 24px;
      box-shadow: var(--shadow);
      padding: 24px;
      display: grid;
      gap: 20px;
    }

    .header {
      display: flex;
      justify-content: space-between;
      align-items: center;
      font-weight: 700;
      font-size: 14px;
    }

    .header button {
      border: none;
      background: none;
      cursor: pointer;
      font-size: 16px;
      padding: 4px 8px;
    }

    .grid {
      display: grid;
      grid-template-columns: repeat(7, 1fr);
      text-align: center;
      gap: 6px 0;
    }

    .weekday {
      font-size: 10px;
    }

    .weekday.sun, .day.sun .num { color: var(--calendar-sunday-color); }
    .weekday.sat, .day.sat .num { color: var(--calendar-saturday-color); }

    .day {
      border: none;
      background: none;
      cursor: pointer;
      display: grid;
      justify-items: center;
      gap: 4px;
      padding: 4px 0;
      min-height: 44px;
    }

    .day.other {
      visibility: hidden;
      pointer-events: none;
    }

    .icon {
      width: 21px;
      height: 21px;
      border-radius: 6px;
      display: grid;
      place-items: center;
      font-size: 12px;
      font-weight: 700;
      color: var(--main-white-color);
      background: var(--category-main-color);
    }

    .num {
      width: 20px;
      height: 20px;
      border-radius: 50%;
      font-size: 12px;
      display: grid;
      place-items: center;
    }

    .day.today .num { background: #dadde1; font-weight: 700; }
    .day.selected .num { background: var(--main-black-color); color: var(--main-white-color); font-weight: 700; }

    .section {
      display: grid;
      gap: 8px;
    }

    .category {
      justify-self: start;
      border: none;
      border-radius: 50px;
      background: #f2f2f2;
      padding: 8px 12px;
      font-weight: 600;
      font-size: 14px;
      cursor: pointer;
    }

    .category::before {
      content: "";
      display: inline-block;
      width: 10px;
      height: 10px;
      margin-right: 6px;
      border-radius: 50%;
      background: var(--dot);
    }

    .entry {
      border: none;
      border-bottom: 2px solid var(--main-black-color);
      padding: 6px 2px;
      font-size: 14px;
      outline: none;
    }

    .todo {
      display: flex;
      align-items: center;
      gap: 10px;
      font-size: 14px;
    }

    .todo input { width: 18px; height: 18px; }
    .todo.done span { color: #9a9a9a; text-decoration: line-through; }
    .todo .more { margin-left: auto; border: none; background: none; cursor: pointer; }

    .sheet {
      position: fixed;
      inset: auto 0 0 0;
      background: var(--main-white-color);
      box-shadow: 0 -12px 40px rgba(31, 31, 31, 0.18);
      border-radius: 18px 18px 0 0;
      padding: 24px;
      display: none;
      justify-items: center;
      gap: 16px;
    }

    .sheet.open { display: grid; }
    .sheet p { font-size: 20px; font-weight: 700; margin: 0; }
    .sheet .actions { display: flex; gap: 16px; }
    .sheet .actions button {
      border: none;
      border-radius: 6px;
      background: var(--modal-bg-color);
      width: 160px;
      height: 56px;
      cursor: pointer;
      font-size: 14px;
    }
    .sheet .delete { color: var(--modal-delete-color); }
  </style>
</head>
<body>
  <main class="app" id="widget">
    <div class="header">
      <span><span id="month">{{MONTH}}</span> &middot; done <span id="achieved">{{ACHIEVED}}</span></span>
      <span>
        <button type="button" data-nav="subtract" aria-label="Previous month">&lsaquo;</button>
        <button type="button" data-nav="today">Today</button>
        <button type="button" data-nav="add" aria-label="Next month">&rsaquo;</button>
      </span>
    </div>
    <div class="grid" id="weekdays"></div>
    <div class="grid" id="days"></div>
    <div id="selected" data-date="{{SELECTED}}"></div>
    <div id="sections"></div>
  </main>

  <section class="sheet" id="sheet">
    <p id="sheet-title"></p>
    <div class="actions">
      <button type="button" id="sheet-edit">Edit</button>
      <button type="button" class="delete" id="sheet-delete">Delete</button>
    </div>
  </section>

  <script>
    const widgetEl = document.getElementById('widget');
    const monthEl = document.getElementById('month');
    const achievedEl = document.getElementById('achieved');
    const daysEl = document.getElementById('days');
    const sectionsEl = document.getElementById('sections');
    const sheetEl = document.getElementById('sheet');
    const sheetTitleEl = document.getElementById('sheet-title');

    const api = async (method, path, body) => {
      const res = await fetch(path, {
        method,
        headers: body ? { 'content-type': 'application/json' } : {},
        body: body ? JSON.stringify(body) : undefined
      });
      if (!res.ok) {
        throw new Error((await res.text()) || res.statusText);
      }
      return res.status === 204 ? null : res.json();
    };

    const weekdayClass = (index) => (index === 0 ? 'sun' : index === 6 ? 'sat' : '');

    document.getElementById('weekdays').innerHTML = ['Sun', 'Mon', 'Tue', 'Wed', 'Thu', 'Fri', 'Sat']
      .map((day, i) => `<div class="weekday ${weekdayClass(i)}">${day}</div>`)
      .join('');

    const dayIcon = (day) => {
      const background = day.colors.length ? day.colors[0] : 'var(--category-main-color)';
      const label = day.all_completed ? '&#10003;' : (day.unachieved || '');
      return `<span class="icon" style="background:${background}">${label}</span>`;
    };

    const renderCalendar = (snapshot) => {
      monthEl.textContent = snapshot.month;
      achievedEl.textContent = snapshot.achieved_this_month;
      daysEl.innerHTML = snapshot.weeks
        .flatMap((week) => week.days)
        .map((day, i) => {
          const classes = ['day', weekdayClass(i % 7)];
          if (day.is_other_month) classes.push('other');
          if (day.is_today) classes.push('today');
          if (day.is_selected) classes.push('selected');
          return `<button type="button" class="${classes.join(' ')}" data-date="${day.date}">
            ${dayIcon(day)}<span class="num">${day.day}</span></button>`;
        })
        .join('');
    };

    const escapeHtml = (text) =>
      text.replace(/[&<>"']/g, (c) => ({ '&': '&amp;', '<': '&lt;', '>': '&gt;', '"': '&quot;', "'": '&#39;' }[c]));

    const renderSections = (snapshot) => {
      sectionsEl.innerHTML = snapshot.sections
        .map((section) => {
          const items = section.items
            .map((item) => `<div class="todo ${item.completed ? 'done' : ''}">
              <input type="checkbox" data-toggle="${item.id}" ${item.completed ? 'checked' : ''} />
              <span>${escapeHtml(item.text)}</span>
              <button type="button" class="more" data-detail="${item.id}">&hellip;</button>
            </div>`)
            .join('');
          const entry = section.input_open
            ? `<input class="entry" data-entry="${section.category.id}" placeholder="Add a to-do" />`
            : '';
          return `<div class="section">
            <button type="button" class="category" style="--dot:${section.category.colorToken}"
              data-category="${section.category.id}">${section.category.displayName} +</button>
            ${items}${entry}
          </div>`;
        })
        .join('');
      const entry = sectionsEl.querySelector('.entry');
      if (entry) entry.focus();
    };

    const renderSheet = (detail) => {
      sheetEl.classList.toggle('open', Boolean(detail));
      sheetTitleEl.textContent = detail ? detail.text : '';
    };

    const render = (snapshot) => {
      renderCalendar(snapshot);
      renderSections(snapshot);
      renderSheet(snapshot.detail);
    };

    const refresh = async () => render(await api('GET', '/api/widget'));

    document.querySelectorAll('[data-nav]').forEach((button) => {
      button.addEventListener('click', async () => {
        render(await api('POST', '/api/calendar/navigate', { direction: button.dataset.nav }));
      });
    });

    daysEl.addEventListener('click', async (event) => {
      const day = event.target.closest('[data-date]');
      if (day) {
        render(await api('POST', '/api/calendar/select', { date: day.dataset.date }));
      }
    });

    sectionsEl.addEventListener('click', async (event) => {
      const category = event.target.closest('[data-category]');
      const toggle = event.target.closest('[data-toggle]');
      const detail = event.target.closest('[data-detail]');
      if (category) {
        render(await api('POST', '/api/input/toggle', { category_id: Number(category.dataset.category) }));
      } else if (toggle) {
        await api('POST', `/api/todos/${toggle.dataset.toggle}/toggle`);
        await refresh();
      } else if (detail) {
        renderSheet(await api('POST', `/api/todos/${detail.dataset.detail}/detail`));
      }
    });

    sectionsEl.addEventListener('keydown', async (event) => {
      if (!event.target.matches('.entry') || event.key !== 'Enter') {
        return;
      }
      const created = await api('POST', '/api/input/key', {
        key: event.key,
        text: event.target.value,
        is_composing: event.isComposing || event.keyCode === 229
      });
      if (created) {
        await refresh();
      }
    });

    document.getElementById('sheet-delete').addEventListener('click', async () => {
      await api('POST', '/api/detail/delete');
      await refresh();
    });

    document.getElementById('sheet-edit').addEventListener('click', () => {
      api('POST', '/api/detail/edit').catch((err) => alert(err.message));
    });

    document.addEventListener('click', async (event) => {
      if (widgetEl.contains(event.target) || sheetEl.contains(event.target)) {
        return;
      }
      if (sheetEl.classList.contains('open')) {
        await api('POST', '/api/detail/close');
        renderSheet(null);
      } else {
        render(await api('POST', '/api/input/dismiss'));
      }
    });

    refresh().catch((err) => console.error(err));
  </script>
</body>
</html>
"#;
