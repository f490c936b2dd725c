//! Embedded storefront pages
//!
//! The storefront ships as two self-contained HTML documents compiled
//! into the binary. The home page renders everything from the JSON API
//! (catalog, brands, features, cart) so the pages and the API can never
//! disagree about state; prices arrive pre-formatted from the server.

pub const HOME_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>CarSales India</title>
    <style>
        * {
            margin: 0;
            padding: 0;
            box-sizing: border-box;
            font-family: -apple-system, 'Segoe UI', Roboto, sans-serif;
        }
        body {
            background: #f9fafb;
            color: #111827;
        }
        nav {
            background: #ffffff;
            border-bottom: 1px solid #e5e7eb;
            padding: 16px 32px;
            display: flex;
            justify-content: space-between;
            align-items: center;
            position: sticky;
            top: 0;
            z-index: 10;
        }
        .brand {
            font-size: 1.4em;
            font-weight: 700;
            color: #2563eb;
        }
        .nav-links a {
            margin-left: 24px;
            text-decoration: none;
            color: #374151;
            font-weight: 500;
        }
        .nav-links a:hover {
            color: #2563eb;
        }
        .hero {
            background: linear-gradient(135deg, #1e3a8a, #2563eb);
            color: white;
            text-align: center;
            padding: 72px 16px;
        }
        .hero h1 {
            font-size: 2.4em;
            margin-bottom: 12px;
        }
        .hero p {
            opacity: 0.9;
            margin-bottom: 28px;
        }
        .search-bar {
            display: flex;
            justify-content: center;
            gap: 8px;
            flex-wrap: wrap;
        }
        .search-bar select,
        .search-bar input {
            padding: 12px 14px;
            border: none;
            border-radius: 6px;
            min-width: 200px;
            font-size: 1em;
        }
        .search-bar button {
            padding: 12px 28px;
            border: none;
            border-radius: 6px;
            background: #f59e0b;
            color: #1f2937;
            font-weight: 600;
            cursor: pointer;
        }
        .features {
            display: grid;
            grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
            gap: 24px;
            max-width: 1100px;
            margin: 48px auto;
            padding: 0 24px;
        }
        .feature {
            background: white;
            border: 1px solid #e5e7eb;
            border-radius: 10px;
            padding: 28px;
            text-align: center;
        }
        .feature h3 {
            margin-bottom: 8px;
            color: #1f2937;
        }
        .feature p {
            color: #6b7280;
            font-size: 0.95em;
        }
        .section-title {
            text-align: center;
            font-size: 1.8em;
            margin: 16px 0 32px;
        }
        .car-grid {
            display: grid;
            grid-template-columns: repeat(auto-fill, minmax(300px, 1fr));
            gap: 28px;
            max-width: 1100px;
            margin: 0 auto 64px;
            padding: 0 24px;
        }
        .car-card {
            background: white;
            border: 1px solid #e5e7eb;
            border-radius: 10px;
            overflow: hidden;
        }
        .car-card img {
            width: 100%;
            height: 190px;
            object-fit: cover;
        }
        .car-body {
            padding: 18px;
        }
        .car-body h3 {
            margin-bottom: 6px;
        }
        .car-price {
            color: #2563eb;
            font-size: 1.25em;
            font-weight: 700;
            margin-bottom: 8px;
        }
        .car-meta {
            color: #6b7280;
            font-size: 0.9em;
            margin-bottom: 14px;
        }
        .add-btn {
            width: 100%;
            padding: 10px;
            border: none;
            border-radius: 6px;
            background: #2563eb;
            color: white;
            font-weight: 600;
            cursor: pointer;
        }
        .add-btn:hover {
            background: #1d4ed8;
        }
        .cart-fab {
            position: fixed;
            bottom: 28px;
            right: 28px;
            width: 58px;
            height: 58px;
            border-radius: 50%;
            border: none;
            background: #2563eb;
            color: white;
            font-size: 1.4em;
            cursor: pointer;
            box-shadow: 0 4px 14px rgba(0,0,0,0.25);
        }
        .cart-badge {
            position: absolute;
            top: -6px;
            right: -6px;
            background: #ef4444;
            color: white;
            border-radius: 50%;
            min-width: 22px;
            height: 22px;
            font-size: 0.6em;
            line-height: 22px;
        }
        .cart-panel {
            position: fixed;
            top: 0;
            right: -400px;
            width: 380px;
            max-width: 92vw;
            height: 100%;
            background: white;
            border-left: 1px solid #e5e7eb;
            box-shadow: -4px 0 18px rgba(0,0,0,0.12);
            transition: right 0.25s ease;
            display: flex;
            flex-direction: column;
            z-index: 20;
        }
        .cart-panel.open {
            right: 0;
        }
        .cart-head {
            display: flex;
            justify-content: space-between;
            align-items: center;
            padding: 18px;
            border-bottom: 1px solid #e5e7eb;
        }
        .cart-close {
            border: none;
            background: none;
            font-size: 1.3em;
            cursor: pointer;
        }
        .steps {
            display: flex;
            justify-content: space-between;
            padding: 18px 28px;
        }
        .step {
            text-align: center;
            color: #9ca3af;
            font-size: 0.8em;
        }
        .step-circle {
            width: 30px;
            height: 30px;
            border-radius: 50%;
            background: #e5e7eb;
            color: #6b7280;
            line-height: 30px;
            margin: 0 auto 6px;
            font-weight: 600;
        }
        .step.active {
            color: #2563eb;
        }
        .step.active .step-circle {
            background: #2563eb;
            color: white;
        }
        .cart-items {
            flex: 1;
            overflow-y: auto;
            padding: 0 18px;
        }
        .cart-line {
            display: flex;
            align-items: center;
            gap: 12px;
            padding: 12px 0;
            border-bottom: 1px solid #f3f4f6;
        }
        .cart-line img {
            width: 64px;
            height: 44px;
            object-fit: cover;
            border-radius: 4px;
        }
        .cart-line .line-name {
            flex: 1;
            font-size: 0.9em;
        }
        .line-price {
            color: #2563eb;
            font-weight: 600;
            font-size: 0.9em;
        }
        .line-remove {
            border: none;
            background: none;
            color: #ef4444;
            font-size: 1.1em;
            cursor: pointer;
        }
        .cart-empty {
            text-align: center;
            color: #9ca3af;
            margin-top: 48px;
        }
        .cart-foot {
            border-top: 1px solid #e5e7eb;
            padding: 18px;
        }
        .cart-total {
            display: flex;
            justify-content: space-between;
            font-weight: 700;
            margin-bottom: 12px;
        }
        .advance-btn {
            width: 100%;
            padding: 12px;
            border: none;
            border-radius: 6px;
            background: #16a34a;
            color: white;
            font-weight: 600;
            cursor: pointer;
        }
        footer {
            background: #111827;
            color: #9ca3af;
            text-align: center;
            padding: 28px 16px;
        }
        footer a {
            color: #9ca3af;
            margin: 0 10px;
            text-decoration: none;
        }
    </style>
</head>
<body>
    <nav>
        <div class="brand">CarSales India</div>
        <div class="nav-links">
            <a href="/">Home</a>
            <a href="/contact">Contact</a>
        </div>
    </nav>

    <section class="hero">
        <h1>Find Your Dream Car in India</h1>
        <p>Explore a wide range of premium cars from top manufacturers at the best prices.</p>
        <div class="search-bar">
            <select id="brandSelect"></select>
            <input id="queryInput" type="text" placeholder="Search by model...">
            <button onclick="submitSearch()">Search</button>
        </div>
    </section>

    <section class="features" id="features"></section>

    <h2 class="section-title">Featured Cars</h2>
    <section class="car-grid" id="carGrid"></section>

    <button class="cart-fab" onclick="setCartOpen(true)">&#128722;<span class="cart-badge" id="cartBadge" style="display: none;">0</span></button>

    <aside class="cart-panel" id="cartPanel">
        <div class="cart-head">
            <h3>Your Cart</h3>
            <button class="cart-close" onclick="setCartOpen(false)">&#10005;</button>
        </div>
        <div class="steps" id="steps"></div>
        <div class="cart-items" id="cartItems"></div>
        <div class="cart-foot">
            <div class="cart-total"><span>Total</span><span id="cartTotal">&#8377;0</span></div>
            <button class="advance-btn" id="advanceBtn" onclick="advanceCheckout()">Continue</button>
        </div>
    </aside>

    <footer>
        <p>&copy; 2024 CarSales India. All rights reserved.</p>
        <p><a href="/">About</a><a href="/contact">Contact</a><a href="/">Terms</a><a href="/">Privacy</a></p>
    </footer>

    <script>
        const STEPS = [
            { number: 1, label: 'Cart' },
            { number: 2, label: 'Details' },
            { number: 3, label: 'Payment' },
        ];

        async function api(path, method, body) {
            const opts = { method: method || 'GET', headers: { 'Content-Type': 'application/json' } };
            if (body !== undefined) {
                opts.body = JSON.stringify(body);
            }
            const res = await fetch(path, opts);
            return res.json();
        }

        function renderBrands(brands) {
            const select = document.getElementById('brandSelect');
            select.innerHTML = brands
                .map(brand => `<option value="${brand}">${brand}</option>`)
                .join('');
        }

        function renderFeatures(features) {
            document.getElementById('features').innerHTML = features
                .map(f => `<div class="feature"><h3>${f.title}</h3><p>${f.description}</p></div>`)
                .join('');
        }

        function renderCatalog(listings) {
            document.getElementById('carGrid').innerHTML = listings
                .map(car => `
                    <div class="car-card">
                        <img src="${car.image}" alt="${car.name}">
                        <div class="car-body">
                            <h3>${car.name}</h3>
                            <div class="car-price">${car.price_display}</div>
                            <div class="car-meta">${car.mileage} &middot; ${car.location}</div>
                            <button class="add-btn" onclick="addToCart(${car.id})">Add to Cart</button>
                        </div>
                    </div>`)
                .join('');
        }

        function renderCart(snapshot) {
            const badge = document.getElementById('cartBadge');
            badge.textContent = snapshot.count;
            badge.style.display = snapshot.count > 0 ? 'block' : 'none';

            document.getElementById('cartPanel').classList.toggle('open', snapshot.is_open);

            document.getElementById('steps').innerHTML = STEPS
                .map(s => `
                    <div class="step${snapshot.checkout_step >= s.number ? ' active' : ''}">
                        <div class="step-circle">${s.number}</div>${s.label}
                    </div>`)
                .join('');

            const itemsEl = document.getElementById('cartItems');
            if (snapshot.items.length === 0) {
                itemsEl.innerHTML = '<p class="cart-empty">Your cart is empty</p>';
            } else {
                itemsEl.innerHTML = snapshot.items
                    .map(line => `
                        <div class="cart-line">
                            <img src="${line.image}" alt="${line.name}">
                            <div class="line-name">${line.name}<div class="line-price">${line.price_display}</div></div>
                            <button class="line-remove" onclick="removeFromCart(${line.id})" title="Remove">&#10005;</button>
                        </div>`)
                    .join('');
            }

            document.getElementById('cartTotal').textContent = snapshot.total_display;
            document.getElementById('advanceBtn').textContent = snapshot.action_label;
        }

        async function addToCart(id) {
            renderCart(await api('/api/cart/items', 'POST', { id }));
        }

        async function removeFromCart(id) {
            renderCart(await api('/api/cart/items/' + id, 'DELETE'));
        }

        async function advanceCheckout() {
            renderCart(await api('/api/cart/advance', 'POST'));
        }

        async function setCartOpen(open) {
            renderCart(await api('/api/cart/open', 'PUT', { open }));
        }

        async function submitSearch() {
            const brand = document.getElementById('brandSelect').value;
            const query = document.getElementById('queryInput').value;
            await api('/api/search', 'POST', { brand, query });
        }

        async function load() {
            const [catalog, brands, features, cart] = await Promise.all([
                api('/api/catalog'),
                api('/api/brands'),
                api('/api/features'),
                api('/api/cart'),
            ]);
            renderCatalog(catalog.listings);
            renderBrands(brands.brands);
            renderFeatures(features.features);
            renderCart(cart);
        }

        load();
    </script>
</body>
</html>
"##;

pub const CONTACT_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Contact - CarSales India</title>
    <style>
        * {
            margin: 0;
            padding: 0;
            box-sizing: border-box;
            font-family: -apple-system, 'Segoe UI', Roboto, sans-serif;
        }
        body {
            background: #f9fafb;
            color: #111827;
        }
        nav {
            background: #ffffff;
            border-bottom: 1px solid #e5e7eb;
            padding: 16px 32px;
            display: flex;
            justify-content: space-between;
            align-items: center;
        }
        .brand {
            font-size: 1.4em;
            font-weight: 700;
            color: #2563eb;
        }
        .nav-links a {
            margin-left: 24px;
            text-decoration: none;
            color: #374151;
            font-weight: 500;
        }
        main {
            max-width: 680px;
            margin: 56px auto;
            padding: 0 24px;
        }
        h1 {
            margin-bottom: 12px;
        }
        .lead {
            color: #6b7280;
            margin-bottom: 32px;
        }
        .card {
            background: white;
            border: 1px solid #e5e7eb;
            border-radius: 10px;
            padding: 24px;
            margin-bottom: 18px;
        }
        .card h3 {
            margin-bottom: 6px;
            color: #1f2937;
        }
        .card p {
            color: #6b7280;
        }
        footer {
            background: #111827;
            color: #9ca3af;
            text-align: center;
            padding: 28px 16px;
            margin-top: 64px;
        }
    </style>
</head>
<body>
    <nav>
        <div class="brand">CarSales India</div>
        <div class="nav-links">
            <a href="/">Home</a>
            <a href="/contact">Contact</a>
        </div>
    </nav>

    <main>
        <h1>Contact Us</h1>
        <p class="lead">Questions about a listing, financing, or delivery? Reach out and our team will get back within one business day.</p>

        <div class="card">
            <h3>Showroom</h3>
            <p>CarSales India, Linking Road, Bandra West, Mumbai 400050</p>
        </div>
        <div class="card">
            <h3>Phone</h3>
            <p>+91 22 4000 1234 (Mon-Sat, 9:00-19:00 IST)</p>
        </div>
        <div class="card">
            <h3>Email</h3>
            <p>hello@carsales.example.in</p>
        </div>
    </main>

    <footer>
        <p>&copy; 2024 CarSales India. All rights reserved.</p>
    </footer>
</body>
</html>
"##;
